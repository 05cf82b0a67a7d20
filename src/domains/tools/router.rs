//! Tool Router - builds the rmcp ToolRouter per tool set.
//!
//! Each binary serves exactly one tool family; the `ToolSet` it passes in
//! selects which routes get registered. Each tool knows how to create its
//! own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{DictionaryEntriesTool, DictionaryLookupTool, SumTool};

/// The tool family a server process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSet {
    /// `get_dictionary_entry` - the flat entry shape with conjugation.
    DictionaryLookup,

    /// `get_dictionary_entries` - the rich multi-entry shape.
    DictionaryEntries,

    /// `sum` - the arithmetic protocol demo.
    SumDemo,
}

impl ToolSet {
    /// Server instructions reported to MCP clients.
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::DictionaryLookup => {
                "Looks up English words in the Longman dictionary and returns a \
                 normalized JSON entry with senses, examples, and conjugation."
            }
            Self::DictionaryEntries => {
                "Looks up English words in the Longman dictionary and returns all \
                 entries with British/American pronunciation, corpus examples, and \
                 word origin."
            }
            Self::SumDemo => "Adds two numbers. A demonstration of the tool-calling protocol.",
        }
    }
}

/// Build the tool router for the given tool set.
pub fn build_tool_router<S>(config: Arc<Config>, tool_set: ToolSet) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let router = ToolRouter::new();
    match tool_set {
        ToolSet::DictionaryLookup => router.with_route(DictionaryLookupTool::create_route(config)),
        ToolSet::DictionaryEntries => {
            router.with_route(DictionaryEntriesTool::create_route(config))
        }
        ToolSet::SumDemo => router.with_route(SumTool::create_route()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router_per_tool_set() {
        let cases = [
            (ToolSet::DictionaryLookup, "get_dictionary_entry"),
            (ToolSet::DictionaryEntries, "get_dictionary_entries"),
            (ToolSet::SumDemo, "sum"),
        ];

        for (tool_set, expected) in cases {
            let router: ToolRouter<TestServer> = build_tool_router(test_config(), tool_set);
            let tools = router.list_all();
            assert_eq!(tools.len(), 1);
            assert_eq!(tools[0].name.as_ref(), expected);
            assert!(tools[0].description.is_some());
        }
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools per set
        for tool_set in [
            ToolSet::DictionaryLookup,
            ToolSet::DictionaryEntries,
            ToolSet::SumDemo,
        ] {
            let config = test_config();
            let registry = ToolRegistry::new(config.clone(), tool_set);
            let registry_names = registry.tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(config, tool_set);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name));
            }
        }
    }
}
