//! Channel comparison
//!
//! snapd reports tracking channels in `track/risk[/branch]` form while
//! manifests usually carry shorthands like `edge` or `1.30`.

const RISKS: &[&str] = &["stable", "candidate", "beta", "edge"];

/// Expand a channel shorthand to `track/risk[/branch]`.
///
/// A bare risk gets the `latest` track; a bare track gets the `stable` risk.
pub fn normalize(channel: &str) -> String {
    let channel = channel.trim();
    let mut parts = channel.split('/');
    match (parts.next(), parts.next()) {
        (Some(risk), None) if RISKS.contains(&risk) => format!("latest/{risk}"),
        (Some(track), None) => format!("{track}/stable"),
        (Some(risk), Some(_)) if RISKS.contains(&risk) => format!("latest/{channel}"),
        _ => channel.to_string(),
    }
}

/// Whether a snap tracking `tracking` satisfies a request for `requested`
pub fn same_channel(tracking: &str, requested: &str) -> bool {
    normalize(tracking) == normalize(requested)
}
