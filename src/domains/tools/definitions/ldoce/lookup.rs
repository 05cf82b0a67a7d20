//! Dictionary lookup tool - the original flat entry shape.
//!
//! Scrapes an LDOCE entry page into a single normalized record: headword,
//! pronunciation, part of speech, inflections, related topics, ordered
//! senses, and the verb conjugation table when the page carries one. When
//! the full `dictentry` markup is absent the tool falls back to a simple
//! flat shape instead of failing.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::common::{
    element_text, error_result, fetch_page, first_text, first_text_opt, format_pronunciation,
    json_result, selector,
};
use crate::core::config::Config;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the dictionary lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DictionaryLookupParams {
    /// The word to look up.
    #[schemars(description = "The English word to look up")]
    pub word: String,
}

// ============================================================================
// Output Shapes
// ============================================================================

/// The document returned to the caller, tagged by extraction shape.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum LookupDocument {
    /// Full entry parsed from the `dictentry` markup.
    Legacy {
        entry: DictionaryEntry,
        #[serde(skip_serializing_if = "Option::is_none")]
        conjugation: Option<Vec<TenseGroup>>,
    },
    /// Fallback shape when the detailed markup is missing.
    Simple { entry: SimpleEntry },
}

/// One dictionary entry in the flat shape.
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub inflections: String,
    pub related_topics: Vec<String>,
    pub senses: Vec<Sense>,
}

/// One numbered sense of an entry.
#[derive(Debug, Clone, Serialize)]
pub struct Sense {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    pub definition: String,
    pub examples: Vec<String>,
}

/// Conjugated forms for one tense of the verb table.
#[derive(Debug, Clone, Serialize)]
pub struct TenseGroup {
    pub tense: String,
    pub forms: Vec<ConjugatedForm>,
}

/// One (subject phrase, surface form) row of the verb table.
#[derive(Debug, Clone, Serialize)]
pub struct ConjugatedForm {
    pub subject: String,
    pub form: String,
}

/// Minimal fallback shape.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleEntry {
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definition: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Dictionary lookup tool - fetches and scrapes one LDOCE entry page.
pub struct DictionaryLookupTool;

impl DictionaryLookupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_dictionary_entry";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up an English word in the Longman Dictionary of Contemporary English. Returns a JSON document with pronunciation, part of speech, inflections, related topics, numbered senses with examples, and the verb conjugation table when present.";

    /// Execute the tool logic: fetch the page, scrape it, serialize.
    pub fn execute(params: &DictionaryLookupParams, config: &Config) -> CallToolResult {
        info!("Dictionary lookup for: {}", params.word);

        let page = match fetch_page(&config.dictionary, &params.word) {
            Ok(page) => page,
            Err(e) => return error_result(&e.to_string()),
        };

        let document = Html::parse_document(&page);
        json_result(&parse_lookup_document(&document, params.word.trim()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DictionaryLookupParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: DictionaryLookupParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // The page fetch uses a blocking HTTP client; keep it off
                // the async executor.
                let result =
                    tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Build the output document, preferring the legacy shape.
fn parse_lookup_document(document: &Html, word: &str) -> LookupDocument {
    match extract_legacy(document, word) {
        Some(entry) => LookupDocument::Legacy {
            entry,
            conjugation: extract_conjugation(document),
        },
        None => LookupDocument::Simple {
            entry: extract_simple(document, word),
        },
    }
}

/// Extract the full entry shape from the first `dictentry` block.
///
/// Returns `None` when the page has no such block; individual missing
/// nodes inside the block degrade to empty fields.
fn extract_legacy(document: &Html, word: &str) -> Option<DictionaryEntry> {
    let entry_sel = selector("span.dictentry");
    let entry = document.select(&entry_sel).next()?;

    let headword = first_text(entry, "span.HWD");
    let topic_sel = selector(".topics_container a.topic");

    Some(DictionaryEntry {
        word: if headword.is_empty() {
            word.to_string()
        } else {
            headword
        },
        pronunciation: format_pronunciation(&first_text(entry, "span.PronCodes")),
        part_of_speech: first_text(entry, "span.POS"),
        inflections: first_text(entry, "span.Inflections"),
        related_topics: document.select(&topic_sel).map(element_text).collect(),
        senses: entry
            .select(&selector("span.Sense"))
            .map(parse_sense)
            .collect(),
    })
}

/// Parse one numbered sense.
fn parse_sense(sense: ElementRef<'_>) -> Sense {
    Sense {
        number: first_text(sense, "span.sensenum"),
        grammar: first_text_opt(sense, "span.GRAM"),
        cross_reference: first_text_opt(sense, "span.Crossref"),
        definition: first_text(sense, "span.DEF"),
        examples: sense
            .select(&selector("span.EXAMPLE"))
            .map(element_text)
            .collect(),
    }
}

/// Fallback extraction for pages without the `dictentry` layout.
fn extract_simple(document: &Html, word: &str) -> SimpleEntry {
    let root = document.root_element();
    let headword = first_text(root, "h1.pagetitle");

    SimpleEntry {
        word: if headword.is_empty() {
            word.to_string()
        } else {
            headword
        },
        pronunciation: format_pronunciation(&first_text(root, "span.PRON")),
        part_of_speech: first_text(root, "span.POS"),
        definition: first_text(root, "span.DEF"),
    }
}

/// Scan the verb table rows, tracking the current tense.
///
/// A row with an `intense` cell moves the tense cursor; every other row
/// with at least two cells contributes a (subject, form) pair to the
/// current tense. Rows before the first tense label are dropped.
fn extract_conjugation(document: &Html) -> Option<Vec<TenseGroup>> {
    let table_sel = selector(".verbTable table");
    let table = document.select(&table_sel).next()?;

    let row_sel = selector("tr");
    let tense_sel = selector("td.intense, th.intense");
    let cell_sel = selector("td, th");

    let mut groups: Vec<TenseGroup> = Vec::new();
    for row in table.select(&row_sel) {
        if let Some(tense_cell) = row.select(&tense_sel).next() {
            let tense = element_text(tense_cell);
            if !tense.is_empty() {
                groups.push(TenseGroup {
                    tense,
                    forms: Vec::new(),
                });
            }
            continue;
        }

        let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
        if cells.len() < 2 {
            continue;
        }

        let Some(current) = groups.last_mut() else {
            continue;
        };
        current.forms.push(ConjugatedForm {
            subject: cells[0].clone(),
            form: cells[1..].join(" ").trim().to_string(),
        });
    }

    if groups.is_empty() { None } else { Some(groups) }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_FIXTURE: &str = r#"
        <html><body>
          <div class="topics_container">
            <a class="topic" href="/topic/nature">Nature</a>
            <a class="topic" href="/topic/food">Food</a>
          </div>
          <span class="dictentry">
            <span class="Head">
              <span class="HWD">water</span>
              <span class="PronCodes">/ˈwɔːtə $ ˈwɒːtər/</span>
              <span class="POS">noun</span>
              <span class="Inflections">plural waters</span>
            </span>
            <span class="Sense">
              <span class="sensenum">1</span>
              <span class="GRAM">[uncountable]</span>
              <span class="DEF">the clear liquid without colour that falls as rain</span>
              <span class="EXAMPLE">Can I have a drink of
                water?</span>
              <span class="EXAMPLE">The water in the lake was very clear.</span>
            </span>
            <span class="Sense">
              <span class="sensenum">2</span>
              <span class="DEF">an area of water such as a lake or sea</span>
              <span class="Crossref">SEA</span>
            </span>
          </span>
          <div class="verbTable">
            <table>
              <tr><td class="intense">Present</td></tr>
              <tr><td>I, you, we, they</td><td>water</td></tr>
              <tr><td>he, she, it</td><td>waters</td></tr>
              <tr><td class="intense">Past</td></tr>
              <tr><td>I, you, he, she, it, we, they</td><td>watered</td></tr>
            </table>
          </div>
        </body></html>
    "#;

    const SIMPLE_FIXTURE: &str = r#"
        <html><body>
          <h1 class="pagetitle">serendipity</h1>
          <span class="PRON">ˌserənˈdɪpəti</span>
          <span class="POS">noun</span>
          <span class="DEF">when interesting or valuable discoveries are made by accident</span>
        </body></html>
    "#;

    fn legacy_entry(doc: LookupDocument) -> (DictionaryEntry, Option<Vec<TenseGroup>>) {
        match doc {
            LookupDocument::Legacy { entry, conjugation } => (entry, conjugation),
            LookupDocument::Simple { .. } => panic!("Expected legacy shape"),
        }
    }

    #[test]
    fn test_legacy_entry_fields() {
        let html = Html::parse_document(LEGACY_FIXTURE);
        let (entry, _) = legacy_entry(parse_lookup_document(&html, "water"));

        assert_eq!(entry.word, "water");
        assert_eq!(entry.pronunciation, "/ˈwɔːtə $ ˈwɒːtər/");
        assert_eq!(entry.part_of_speech, "noun");
        assert_eq!(entry.inflections, "plural waters");
        assert_eq!(entry.related_topics, vec!["Nature", "Food"]);
    }

    #[test]
    fn test_legacy_senses_in_order() {
        let html = Html::parse_document(LEGACY_FIXTURE);
        let (entry, _) = legacy_entry(parse_lookup_document(&html, "water"));

        assert_eq!(entry.senses.len(), 2);

        let first = &entry.senses[0];
        assert_eq!(first.number, "1");
        assert_eq!(first.grammar.as_deref(), Some("[uncountable]"));
        assert_eq!(first.cross_reference, None);
        assert_eq!(
            first.definition,
            "the clear liquid without colour that falls as rain"
        );
        // whitespace in the example node is collapsed
        assert_eq!(first.examples[0], "Can I have a drink of water?");
        assert_eq!(first.examples.len(), 2);

        let second = &entry.senses[1];
        assert_eq!(second.number, "2");
        assert_eq!(second.grammar, None);
        assert_eq!(second.cross_reference.as_deref(), Some("SEA"));
        assert!(second.examples.is_empty());
    }

    #[test]
    fn test_conjugation_tense_cursor() {
        let html = Html::parse_document(LEGACY_FIXTURE);
        let (_, conjugation) = legacy_entry(parse_lookup_document(&html, "water"));

        let groups = conjugation.expect("verb table present");
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].tense, "Present");
        assert_eq!(groups[0].forms.len(), 2);
        assert_eq!(groups[0].forms[0].subject, "I, you, we, they");
        assert_eq!(groups[0].forms[0].form, "water");
        assert_eq!(groups[0].forms[1].form, "waters");

        assert_eq!(groups[1].tense, "Past");
        assert_eq!(groups[1].forms.len(), 1);
        assert_eq!(groups[1].forms[0].form, "watered");
    }

    #[test]
    fn test_conjugation_rows_before_first_tense_dropped() {
        let html = Html::parse_document(
            r#"<div class="verbTable"><table>
                 <tr><td>stray</td><td>row</td></tr>
                 <tr><td class="intense">Present</td></tr>
                 <tr><td>it</td><td>rains</td></tr>
               </table></div>"#,
        );
        let groups = extract_conjugation(&html).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].forms.len(), 1);
        assert_eq!(groups[0].forms[0].form, "rains");
    }

    #[test]
    fn test_simple_fallback_shape() {
        let html = Html::parse_document(SIMPLE_FIXTURE);
        match parse_lookup_document(&html, "serendipity") {
            LookupDocument::Simple { entry } => {
                assert_eq!(entry.word, "serendipity");
                assert_eq!(entry.pronunciation, "/ˌserənˈdɪpəti/");
                assert_eq!(entry.part_of_speech, "noun");
                assert!(entry.definition.starts_with("when interesting"));
            }
            LookupDocument::Legacy { .. } => panic!("Expected simple shape"),
        }
    }

    #[test]
    fn test_empty_page_never_errors() {
        let html = Html::parse_document("<html><body></body></html>");
        match parse_lookup_document(&html, "ghost") {
            LookupDocument::Simple { entry } => {
                assert_eq!(entry.word, "ghost");
                assert_eq!(entry.pronunciation, "");
                assert_eq!(entry.part_of_speech, "");
                assert_eq!(entry.definition, "");
            }
            LookupDocument::Legacy { .. } => panic!("Expected simple shape"),
        }
    }

    #[test]
    fn test_entry_without_senses_or_table() {
        let html = Html::parse_document(
            r#"<span class="dictentry"><span class="HWD">blip</span></span>"#,
        );
        let (entry, conjugation) = legacy_entry(parse_lookup_document(&html, "blip"));
        assert_eq!(entry.word, "blip");
        assert!(entry.senses.is_empty());
        assert!(entry.related_topics.is_empty());
        assert!(conjugation.is_none());
    }

    #[test]
    fn test_serialized_document_is_tagged() {
        let html = Html::parse_document(LEGACY_FIXTURE);
        let doc = parse_lookup_document(&html, "water");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["shape"], "legacy");
        assert_eq!(value["entry"]["word"], "water");
        assert_eq!(value["conjugation"][0]["tense"], "Present");
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_lookup_live() {
        let params = DictionaryLookupParams {
            word: "water".to_string(),
        };
        let config = Config::default();
        let result = DictionaryLookupTool::execute(&params, &config);
        assert!(
            !result.is_error.unwrap_or(false),
            "Expected success but got error"
        );
    }
}
