// Slug generation.

/// Derive a URL-safe slug from a display name: lowercase, ASCII
/// alphanumerics kept, whitespace/underscores become dashes, everything
/// else dropped, runs of dashes collapsed, edges trimmed.
pub fn generate_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_dash = true; // swallows leading dashes
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_dash = false;
        } else if (c.is_whitespace() || c == '_' || c == '-') && !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Resolve slug collisions deterministically: `base`, `base-1`, `base-2`, ...
pub fn uniquify(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    let mut counter = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_slugs() {
        assert_eq!(generate_slug("Demo Hotel"), "demo-hotel");
        assert_eq!(generate_slug("  The   Grand  "), "the-grand");
        assert_eq!(generate_slug("Grand_Café & Bar"), "grand-caf-bar");
        assert_eq!(generate_slug("---"), "");
    }

    #[test]
    fn uniquify_suffixes_deterministically() {
        let existing = ["demo-hotel", "demo-hotel-1"];
        let taken = |s: &str| existing.contains(&s);

        assert_eq!(uniquify("fresh", taken), "fresh");
        assert_eq!(uniquify("demo-hotel", taken), "demo-hotel-2");
    }
}
