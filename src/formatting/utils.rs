use crate::access::Capabilities;

/// Cut `s` to at most `max_len` characters, ending in `...` when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// `admin`, `team-lead`, ... style list of the flags that are set.
pub fn capability_summary(capabilities: &Capabilities) -> String {
    let flags = [
        ("authenticated", capabilities.is_authenticated),
        ("admin", capabilities.is_admin),
        ("team-lead", capabilities.is_team_lead),
        ("sales-associate", capabilities.is_sales_associate),
    ];

    let set: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    if set.is_empty() {
        "none".to_string()
    } else {
        set.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Leads", 10), "Leads");
        assert_eq!(truncate("Performance overview", 10), "Perform...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("✓✓✓✓✓✓", 5), "✓✓...");
    }

    #[test]
    fn summary_of_anonymous_is_none() {
        assert_eq!(capability_summary(&Capabilities::default()), "none");
    }
}
