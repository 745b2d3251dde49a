//! MediaWiki action API client

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::api::WikiApi;
use crate::error::{WikiError, WikiResult};

/// Bot-password credentials (`User@botname` / generated password)
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Connection settings for [`MediaWikiClient`]
#[derive(Debug, Clone)]
pub struct WikiClientConfig {
    /// `api.php` endpoint
    pub api_url: String,
    /// Sent with every request
    pub user_agent: String,
    /// Per-request timeout; an expired request fails without retry
    pub timeout: Duration,
    /// Login before the first write when present
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryBody,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<QueryPage>,
}

#[derive(Debug, Deserialize)]
struct QueryPage {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    slots: Slots,
}

#[derive(Debug, Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Debug, Deserialize)]
struct Slot {
    #[serde(default)]
    content: String,
}

/// [`WikiApi`] over the MediaWiki action API
pub struct MediaWikiClient {
    client: Client,
    config: WikiClientConfig,
    logged_in: bool,
    csrf_token: Option<String>,
}

impl MediaWikiClient {
    /// Build a client; no request is made until the first read or write
    pub fn new(config: WikiClientConfig) -> WikiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            config,
            logged_in: false,
            csrf_token: None,
        })
    }

    fn check(&self, response: reqwest::blocking::Response) -> WikiResult<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Status {
                status: status.as_u16(),
                url: self.config.api_url.clone(),
            });
        }
        let payload: Value = response.json()?;
        match api_error(&payload) {
            Some(error) => Err(error),
            None => Ok(payload),
        }
    }

    fn get(&self, params: &[(&str, &str)]) -> WikiResult<Value> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()?;
        self.check(response)
    }

    fn post(&self, params: &[(&str, &str)]) -> WikiResult<Value> {
        let mut form: Vec<(&str, &str)> = vec![("format", "json"), ("formatversion", "2")];
        form.extend_from_slice(params);
        let response = self.client.post(&self.config.api_url).form(&form).send()?;
        self.check(response)
    }

    fn token(&self, kind: &str) -> WikiResult<String> {
        let payload = self.get(&[("action", "query"), ("meta", "tokens"), ("type", kind)])?;
        token_from(&payload, kind)
    }

    fn login(&mut self) -> WikiResult<()> {
        if self.logged_in {
            return Ok(());
        }
        let Some(credentials) = self.config.credentials.clone() else {
            tracing::warn!("No wiki credentials configured; editing anonymously");
            self.logged_in = true;
            return Ok(());
        };

        let login_token = self.token("login")?;
        let payload = self.post(&[
            ("action", "login"),
            ("lgname", credentials.username.as_str()),
            ("lgpassword", credentials.password.as_str()),
            ("lgtoken", login_token.as_str()),
        ])?;
        check_login(&payload)?;

        tracing::info!("Logged in to {} as {}", self.config.api_url, credentials.username);
        self.logged_in = true;
        Ok(())
    }

    fn csrf_token(&mut self) -> WikiResult<String> {
        if let Some(token) = &self.csrf_token {
            return Ok(token.clone());
        }
        self.login()?;
        let token = self.token("csrf")?;
        self.csrf_token = Some(token.clone());
        Ok(token)
    }
}

/// The `error` object of a response, if any
fn api_error(payload: &Value) -> Option<WikiError> {
    let error = payload.get("error")?;
    let field = |name: &str, default: &str| {
        error
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };
    Some(WikiError::Api {
        code: field("code", "unknown_error"),
        info: field("info", "unknown info"),
    })
}

fn token_from(payload: &Value, kind: &str) -> WikiResult<String> {
    payload
        .pointer(&format!("/query/tokens/{kind}token"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| WikiError::Decode(format!("no {kind} token in response")))
}

fn check_login(payload: &Value) -> WikiResult<()> {
    let result = payload
        .pointer("/login/result")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    if result == "Success" {
        return Ok(());
    }
    let reason = payload
        .pointer("/login/reason")
        .and_then(Value::as_str)
        .unwrap_or(result);
    Err(WikiError::Login(reason.to_string()))
}

/// Current text of the first page in a revisions query
fn page_content(payload: Value) -> WikiResult<Option<String>> {
    let parsed: QueryResponse =
        serde_json::from_value(payload).map_err(|e| WikiError::Decode(e.to_string()))?;

    let Some(page) = parsed.query.pages.into_iter().next() else {
        return Ok(None);
    };
    if page.missing {
        return Ok(None);
    }
    Ok(page.revisions.into_iter().next().map(|r| r.slots.main.content))
}

/// API errors during an edit are rejections of that page
fn edit_error(title: &str, error: WikiError) -> WikiError {
    match error {
        WikiError::Api { code, info } => WikiError::WriteRejected {
            title: title.to_string(),
            reason: format!("[{code}] {info}"),
        },
        other => other,
    }
}

fn check_edit(title: &str, payload: &Value) -> WikiResult<()> {
    let result = payload
        .pointer("/edit/result")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    if result == "Success" {
        Ok(())
    } else {
        Err(WikiError::WriteRejected {
            title: title.to_string(),
            reason: result.to_string(),
        })
    }
}

impl WikiApi for MediaWikiClient {
    fn read_page(&mut self, title: &str) -> WikiResult<Option<String>> {
        let payload = self.get(&[
            ("action", "query"),
            ("prop", "revisions"),
            ("titles", title),
            ("rvprop", "content"),
            ("rvslots", "main"),
        ])?;
        page_content(payload)
    }

    fn write_page(&mut self, title: &str, text: &str, summary: &str) -> WikiResult<()> {
        let token = self.csrf_token()?;
        let payload = self
            .post(&[
                ("action", "edit"),
                ("title", title),
                ("text", text),
                ("summary", summary),
                ("bot", "1"),
                ("token", token.as_str()),
            ])
            .map_err(|e| edit_error(title, e))?;
        check_edit(title, &payload)?;
        tracing::debug!("Saved {title}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_existing_page_content() {
        let payload = json!({
            "query": { "pages": [{
                "title": "ファンレベル",
                "revisions": [{ "slots": { "main": { "content": "本文" } } }]
            }]}
        });
        assert_eq!(page_content(payload).unwrap(), Some("本文".to_string()));
    }

    #[test]
    fn test_missing_page_is_none() {
        let payload = json!({
            "query": { "pages": [{ "title": "Template:bot/無い", "missing": true }] }
        });
        assert_eq!(page_content(payload).unwrap(), None);
    }

    #[test]
    fn test_unexpected_query_shape() {
        let err = page_content(json!({ "batchcomplete": true })).unwrap_err();
        assert!(matches!(err, WikiError::Decode(_)));
    }

    #[test]
    fn test_error_object() {
        let payload = json!({ "error": { "code": "badtoken", "info": "Invalid CSRF token." } });
        match api_error(&payload) {
            Some(WikiError::Api { code, info }) => {
                assert_eq!(code, "badtoken");
                assert_eq!(info, "Invalid CSRF token.");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(api_error(&json!({ "edit": {} })).is_none());
    }

    #[test]
    fn test_tokens() {
        let payload = json!({ "query": { "tokens": { "csrftoken": "abc+\\" } } });
        assert_eq!(token_from(&payload, "csrf").unwrap(), "abc+\\");
        assert!(matches!(token_from(&payload, "login"), Err(WikiError::Decode(_))));
    }

    #[test]
    fn test_login_result() {
        assert!(check_login(&json!({ "login": { "result": "Success" } })).is_ok());

        let failed = json!({ "login": { "result": "Failed", "reason": "Incorrect password" } });
        assert!(matches!(
            check_login(&failed),
            Err(WikiError::Login(reason)) if reason == "Incorrect password"
        ));

        let no_reason = json!({ "login": { "result": "Aborted" } });
        assert!(matches!(
            check_login(&no_reason),
            Err(WikiError::Login(reason)) if reason == "Aborted"
        ));
    }

    #[test]
    fn test_edit_result() {
        assert!(check_edit("p", &json!({ "edit": { "result": "Success" } })).is_ok());
        assert!(matches!(
            check_edit("p", &json!({ "edit": { "result": "Failure" } })),
            Err(WikiError::WriteRejected { title, reason }) if title == "p" && reason == "Failure"
        ));
    }

    #[test]
    fn test_edit_api_error_is_rejection() {
        let error = WikiError::Api {
            code: "protectedpage".into(),
            info: "This page has been protected".into(),
        };
        assert!(matches!(
            edit_error("p", error),
            WikiError::WriteRejected { reason, .. } if reason == "[protectedpage] This page has been protected"
        ));
        assert!(matches!(
            edit_error("p", WikiError::Login("x".into())),
            WikiError::Login(_)
        ));
    }
}
