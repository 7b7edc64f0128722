use maud::{html, Markup, Render};
use wordsearch_api_types::search::{SearchResult, SearchResults};

const RESULT_STYLE: &str = "background: white; margin-bottom: 20px; display: block; margin-top: 5px; width: 450px; height: auto; padding: 10px 0; border: 1px solid #eee; border-radius: 20px;";
const FILE_STYLE: &str = "display: block; margin: 5px 20px;";
const TITLE_STYLE: &str = "display: inline-block";
const WORDS_STYLE: &str =
    "display: inline-block; float: right; padding-left: 20px; border-left: 1px solid #eee;";

/// Card for one matched file. maud escapes the interpolated values.
pub struct ResultFragment<'a> {
    pub filename: &'a str,
    pub words_encountered: u64,
}

impl<'a> From<&'a SearchResult> for ResultFragment<'a> {
    fn from(result: &'a SearchResult) -> Self {
        Self {
            filename: &result.filename,
            words_encountered: result.words_encountered,
        }
    }
}

impl Render for ResultFragment<'_> {
    fn render(&self) -> Markup {
        html! {
          span class="result" style=(RESULT_STYLE) {
            span class="file" style=(FILE_STYLE) {
              span class="title-file" style=(TITLE_STYLE) { (self.filename) }
              span class="words-encountered" style=(WORDS_STYLE) { (self.words_encountered) }
            }
          }
        }
    }
}

pub struct NoResults;

impl Render for NoResults {
    fn render(&self) -> Markup {
        html! {
          span class="result no-results" style=(RESULT_STYLE) {
            span class="file" style=(FILE_STYLE) { "No results found" }
          }
        }
    }
}

pub fn render(filename: &str, words_encountered: u64) -> String {
    ResultFragment {
        filename,
        words_encountered,
    }
    .render()
    .into_string()
}

/// Only the first match is shown, an empty list gets the placeholder.
pub fn render_results(results: &SearchResults) -> String {
    match results.first() {
        Some(first) => ResultFragment::from(first).render().into_string(),
        None => NoResults.render().into_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fragment_contains_values() {
        let html = render("a.txt", 3);
        assert!(html.contains("a.txt"));
        assert!(html.contains(">3<"));
        assert!(html.contains(r#"class="words-encountered""#));
        assert!(html.starts_with(r#"<span class="result""#));
    }

    #[test]
    fn fragment_escapes_markup() {
        let html = render("<img src=x onerror=alert(1)>&.txt", 1);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;&amp;.txt"));
    }

    #[test]
    fn renders_first_of_many() {
        let results = SearchResults::from(vec![
            SearchResult {
                filename: "report.doc".to_string(),
                words_encountered: 42,
            },
            SearchResult {
                filename: "notes.txt".to_string(),
                words_encountered: 7,
            },
        ]);
        let html = render_results(&results);
        assert!(html.contains("report.doc"));
        assert!(html.contains("42"));
        assert!(!html.contains("notes.txt"));
    }

    #[test]
    fn empty_results_render_placeholder() {
        let html = render_results(&SearchResults::None);
        assert!(html.contains("No results found"));
    }

    #[test]
    fn same_input_same_fragment() {
        assert_eq!(render("a.txt", 3), render("a.txt", 3));
    }
}
