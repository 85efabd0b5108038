//! Alerts for reporting form submission errors to users.

use maud::{Markup, html};

/// An error message that is swapped into the page's alert container.
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alert"
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400 border border-red-300 \
                    dark:border-red-800"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_message_and_details() {
        let markup = Alert::error("Could not save transaction", "Missing required fields: amount")
            .into_html()
            .into_string();

        let html = Html::parse_fragment(&markup);
        let paragraphs = html
            .select(&Selector::parse("div[role=alert] p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            paragraphs,
            vec!["Could not save transaction", "Missing required fields: amount"]
        );
    }

    #[test]
    fn omits_empty_details() {
        let markup = Alert::error("Something went wrong", "").into_html().into_string();

        let html = Html::parse_fragment(&markup);
        let count = html.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(count, 1);
    }
}
