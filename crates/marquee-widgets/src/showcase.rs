//! Labeled code samples for the landing-page showcase.

use serde::{Deserialize, Serialize};

/// One labeled code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseTab {
    /// Stable identifier
    pub id: String,

    /// Tab label
    pub label: String,

    /// One-line description shown with the sample
    #[serde(default)]
    pub description: String,

    /// Code sample
    pub code: String,
}

/// Active-tab state for a tabbed showcase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    active: usize,
}

impl TabState {
    /// Start on the first tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tab index.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Activate a tab. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.active = index;
        }
    }
}

/// The default sample set: the framework's request/response/route/server
/// walkthrough. Used when the site provides no `showcase.toml`.
pub fn default_tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            id: "request".to_string(),
            label: "Request".to_string(),
            description: "Define HTTP method, path captures, query params, headers, and body in one composable block.".to_string(),
            code: r#"input
  = request
  & method GET
  & path do
      lit "users"
      userId <- capture @Int "id"
      pure userId
  & query do
      page <- param @Int "page"
      limit <- paramOpt @Int "limit"
      pure (page, limit)
  & body none
  & headers do
      auth <- header @Text "Authorization"
      pure auth
  & security bearerAuth"#
                .to_string(),
        },
        ShowcaseTab {
            id: "response".to_string(),
            label: "Response".to_string(),
            description: "Specify possible responses with status codes, typed bodies, and headers.".to_string(),
            code: r#"outputs = either notFound ok

ok
  = response
  & status 200
  & body @User
  & headers do
      cache <- header @Text "Cache-Control"
      pure cache

notFound
  = response
  & status 404
  & body @ErrorResponse
  & headers none"#
                .to_string(),
        },
        ShowcaseTab {
            id: "route".to_string(),
            label: "Route".to_string(),
            description: "Connect request and response specs to your handler with full type inference.".to_string(),
            code: r#"getUserAction = route := handler
  where
    route = input :-> outputs

    handler = \Input{..} -> do
      user <- findUser path.userId
      case user of
        Nothing ->
          pure $ Left $ Output
            { body = ErrorResponse "User not found"
            , headers = ()
            }
        Just u ->
          pure $ Right $ Output
            { body = u
            , headers = "max-age=3600"
            }"#
                .to_string(),
        },
        ShowcaseTab {
            id: "server".to_string(),
            label: "Server".to_string(),
            description: "Compose routes into a server with do-notation.".to_string(),
            code: r#"server = Server.do
  getUserAction
  createUserAction
  updateUserAction
  deleteUserAction
  listUsersAction
  searchUsersAction

main :: IO ()
main = do
  putStrLn "Starting server on port 8080"
  runServer 8080 server"#
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_tabs_are_ordered_and_distinct() {
        let tabs = default_tabs();

        let ids: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["request", "response", "route", "server"]);
    }

    #[test]
    fn tab_selection_is_bounds_checked() {
        let mut state = TabState::new();

        state.select(2, 4);
        assert_eq!(state.active(), 2);

        state.select(9, 4);
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn tabs_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct ShowcaseFile {
            tab: Vec<ShowcaseTab>,
        }

        let source = r#"
[[tab]]
id = "request"
label = "Request"
code = "input = request"

[[tab]]
id = "server"
label = "Server"
description = "Compose routes."
code = "server = Server.do"
"#;

        let file: ShowcaseFile = toml::from_str(source).unwrap();

        assert_eq!(file.tab.len(), 2);
        assert_eq!(file.tab[0].description, "");
        assert_eq!(file.tab[1].label, "Server");
    }
}
