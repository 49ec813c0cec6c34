use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::wire::{ContentResult, Variant};

/// Spinner on stderr while the model works. Call `finish_and_clear` when done.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn heading(label: &str) -> String {
    format!("━━ {} ━━", label).bold().to_string()
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-terminal rendering. Content markup is printed as-is.
pub fn render_result(r: &ContentResult) -> String {
    let labels = r.labels();
    let mut out = String::new();
    out.push_str(&format!("\n{}  {}\n", format!("[{}]", r.content_type).cyan().bold(), r.title.bold()));
    out.push_str(&format!("{} {}\n\n", format!("{}:", labels.estimate).dimmed(), r.estimate));
    out.push_str(&format!("{}\n\n", r.content));
    out.push_str(&format!("{}\n{}\n\n", heading("sections"), numbered(&r.sections)));
    out.push_str(&format!("{}\n{}\n\n", heading(labels.tips), numbered(&r.tips)));
    out.push_str(&format!("{}\n{}\n", heading("keywords"), r.keywords.join(", ").green()));
    out
}

pub fn render_topics(variant: Variant, topics: &[String]) -> String {
    let title = match variant {
        Variant::Academic => "Suggested topics",
        Variant::Social => "Trending topics",
    };
    format!("{}\n{}\n", heading(title), numbered(topics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ContentType;

    #[test]
    fn renders_every_field_with_variant_labels() {
        colored::control::set_override(false);
        let r = ContentResult {
            content_type: ContentType::StoryCaption,
            title: "Rainy Day".into(),
            content: "# Caption 1\n> quote #rain".into(),
            sections: vec!["Captions".into(), "Usage Notes".into()],
            keywords: vec!["#rain".into(), "#monsoon".into()],
            tips: vec!["Post at dusk".into()],
            estimate: "5k views".into(),
        };
        let text = render_result(&r);
        assert!(text.contains("[Story Caption]  Rainy Day"));
        assert!(text.contains("estimatedReach: 5k views"));
        assert!(text.contains("# Caption 1\n> quote #rain"));
        assert!(text.contains("━━ engagementTips ━━\n1. Post at dusk"));
        assert!(text.contains("1. Captions\n2. Usage Notes"));
        assert!(text.contains("#rain, #monsoon"));
    }

    #[test]
    fn topics_are_numbered() {
        colored::control::set_override(false);
        let text = render_topics(Variant::Social, &["a".to_string(), "b".to_string()]);
        assert_eq!(text, "━━ Trending topics ━━\n1. a\n2. b\n");
    }
}
