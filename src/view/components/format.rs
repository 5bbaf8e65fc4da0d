/// Compact age of a response for the results title.
/// - < 5s: "just now"
/// - < 60s: "Xs ago"
/// - < 3600s: "Xm ago"
/// - otherwise: "Xh ago"
pub fn format_ago(secs: i64) -> String {
    match secs {
        s if s < 5 => "just now".to_string(),
        s if s < 60 => format!("{}s ago", s),
        s if s < 3600 => format!("{}m ago", s / 60),
        s => format!("{}h ago", s / 3600),
    }
}
