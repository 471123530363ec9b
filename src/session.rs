use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::Serialize;

/// Cookie-holding HTTP session against one edupage subdomain. Login itself
/// is handled elsewhere; an authenticated session is adopted via its
/// PHPSESSID cookie.
pub struct EdupageSession {
    subdomain: String,
    client: reqwest::Client,
    logged_in: bool,
}

impl EdupageSession {
    /// Fresh anonymous session. Menu operations will refuse to run on it.
    pub fn new(subdomain: &str) -> Result<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(EdupageSession {
            subdomain: subdomain.to_string(),
            client,
            logged_in: false,
        })
    }

    /// Adopt an already-authenticated PHPSESSID from a separate login flow.
    pub fn from_phpsessid(subdomain: &str, phpsessid: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("PHPSESSID={phpsessid}"))
                .context("PHPSESSID is not a valid header value")?,
        );

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(EdupageSession {
            subdomain: subdomain.to_string(),
            client,
            logged_in: true,
        })
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub(crate) fn menu_url(&self) -> String {
        format!("https://{}.edupage.org/menu/", self.subdomain)
    }

    pub async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send().await?.text().await
    }

    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<String, reqwest::Error> {
        self.client.post(url).form(form).send().await?.text().await
    }
}
