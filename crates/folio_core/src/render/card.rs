//! Card grid renderer.
//!
//! # Responsibility
//! - Materialize one card per project, in collection order.
//! - Track per-card visibility and the `no-results` placeholder.
//!
//! # Invariants
//! - Card order equals collection order and never changes.
//! - The placeholder always renders after the last card.

use log::debug;

use super::markup::{escape_html, interpolate};
use crate::config::{ContentTrust, RenderConfig};
use crate::filter::TagFilter;
use crate::model::project::Project;

/// One rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Project id, exposed as `data-id`.
    pub id: String,
    /// Tags used for filter matching.
    pub tags: Vec<String>,
    /// JSON array text exposed as `data-tags`.
    pub tags_attr: String,
    pub animation_delay_ms: u64,
    pub hidden: bool,
    inner_html: String,
}

impl Card {
    /// Renders a card for `project` at position `index`.
    pub fn build(project: &Project, index: usize, config: &RenderConfig) -> Self {
        let trust = config.content_trust;
        let title = interpolate(trust, project.title.as_str());

        let mut inner = String::new();
        if let Some(hero) = project.hero.as_deref() {
            inner.push_str(&format!(
                "<img class=\"card-hero\" src=\"{}\" alt=\"{title}\" loading=\"lazy\">",
                interpolate(trust, &config.media_url(hero))
            ));
        }
        inner.push_str(&format!(
            "<div class=\"card-year\">{}</div><div class=\"card-title\">{title}</div><div class=\"card-excerpt\">{}</div>",
            interpolate(trust, project.year.as_str()),
            interpolate(trust, project.excerpt.as_str()),
        ));
        inner.push_str("<div class=\"card-tags\">");
        for tag in &project.tags {
            inner.push_str(&format!(
                "<span class=\"card-tag\">{}</span>",
                interpolate(trust, tag)
            ));
        }
        inner.push_str("</div><div class=\"card-cta\">View project &nbsp;→</div>");

        // A list of strings always serializes.
        let tags_attr = serde_json::to_string(&project.tags).unwrap_or_else(|_| "[]".to_string());

        Self {
            id: project.id.clone(),
            tags: project.tags.clone(),
            tags_attr,
            animation_delay_ms: index as u64 * u64::from(config.stagger_step_ms),
            hidden: false,
            inner_html: inner,
        }
    }

    /// Outer card markup including the current visibility class.
    pub fn to_html(&self, config: &RenderConfig) -> String {
        let tags_attr = match config.content_trust {
            ContentTrust::Trusted => self.tags_attr.replace('\'', "&#39;"),
            ContentTrust::Untrusted => escape_html(self.tags_attr.as_str()),
        };
        let class = if self.hidden {
            "project-card hidden"
        } else {
            "project-card"
        };
        format!(
            "<div class=\"{class}\" data-id=\"{}\" data-tags='{}' style=\"animation-delay: {}s\">{}</div>",
            interpolate(config.content_trust, self.id.as_str()),
            tags_attr,
            self.animation_delay_ms as f64 / 1000.0,
            self.inner_html
        )
    }
}

/// Visible/total counts after a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub visible: usize,
    pub total: usize,
}

/// Ordered cards plus the trailing `no-results` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardGrid {
    cards: Vec<Card>,
    no_results_visible: bool,
}

impl CardGrid {
    /// Builds one card per project in collection order.
    pub fn build(projects: &[Project], config: &RenderConfig) -> Self {
        let cards: Vec<Card> = projects
            .iter()
            .enumerate()
            .map(|(index, project)| Card::build(project, index, config))
            .collect();
        debug!(
            "event=grid_build module=render status=ok cards={}",
            cards.len()
        );
        Self {
            no_results_visible: cards.is_empty(),
            cards,
        }
    }

    /// Recomputes every card's visibility against the filter.
    pub fn apply_filter(&mut self, filter: &TagFilter) -> GridSummary {
        let mut visible = 0;
        for card in &mut self.cards {
            let show = filter.matches(&card.tags);
            card.hidden = !show;
            if show {
                visible += 1;
            }
        }
        self.no_results_visible = visible == 0;
        GridSummary {
            visible,
            total: self.cards.len(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Ids of the cards currently shown, in grid order.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|card| !card.hidden)
            .map(|card| card.id.as_str())
            .collect()
    }

    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    /// Grid markup: cards in order, then the placeholder.
    pub fn to_html(&self, config: &RenderConfig) -> String {
        let mut html: String = self.cards.iter().map(|card| card.to_html(config)).collect();
        let display = if self.no_results_visible { "" } else { "none" };
        html.push_str(&format!(
            "<div id=\"no-results\" style=\"display: {display}\">No projects match the selected tags.</div>"
        ));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, CardGrid};
    use crate::config::{ContentTrust, RenderConfig};
    use crate::model::project::Project;

    #[test]
    fn card_carries_id_tags_and_stagger() {
        let mut project = Project::new("p-2", "Second");
        project.tags = vec!["ui".to_string(), "rust".to_string()];
        project.hero = Some("hero.jpg".to_string());
        let card = Card::build(&project, 2, &RenderConfig::default());

        assert_eq!(card.tags_attr, r#"["ui","rust"]"#);
        assert_eq!(card.animation_delay_ms, 100);
        let html = card.to_html(&RenderConfig::default());
        assert!(html.contains("data-id=\"p-2\""));
        assert!(html.contains("src=\"media/hero.jpg\" alt=\"Second\""));
        assert!(html.contains(
            "<span class=\"card-tag\">ui</span><span class=\"card-tag\">rust</span>"
        ));
    }

    #[test]
    fn untrusted_tag_attribute_is_fully_escaped() {
        let config = RenderConfig {
            content_trust: ContentTrust::Untrusted,
            ..RenderConfig::default()
        };
        let mut project = Project::new("p-1", "First");
        project.tags = vec!["R&D".to_string(), "it's".to_string()];
        let html = Card::build(&project, 0, &config).to_html(&config);

        assert!(html.contains("data-tags='[&quot;R&amp;D&quot;,&quot;it&#39;s&quot;]'"));
        assert!(!html.contains("R&D\""));
    }

    #[test]
    fn placeholder_renders_last() {
        let projects = vec![Project::new("a", "A"), Project::new("b", "B")];
        let grid = CardGrid::build(&projects, &RenderConfig::default());
        let html = grid.to_html(&RenderConfig::default());
        let placeholder = html.find("id=\"no-results\"").expect("placeholder");
        let last_card = html.rfind("project-card").expect("card");
        assert!(last_card < placeholder);
        assert!(html.contains("style=\"display: none\""));
    }
}
