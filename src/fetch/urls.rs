// src/fetch/urls.rs

use crate::sensitive::REDACTED;
use url::Url;

/// Query parameters whose values never show up in logs or error messages.
static SECRET_PARAMS: &[&str] = &["api_key", "apikey"];

/// Strip leading, trailing and doubled `/` from a caller-supplied route.
pub fn normalize_route(route: &str) -> String {
    route
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build `{base}/{version}/{route}?k=v&...`, percent-encoding the query values.
pub fn build_url(
    base: &str,
    version: &str,
    route: &str,
    params: &[(&str, &str)],
) -> Result<Url, url::ParseError> {
    let base = base.trim_end_matches('/');
    let version = version.trim_matches('/');
    let route = normalize_route(route);

    let mut url = Url::parse(&format!("{}/{}/{}", base, version, route))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter().copied());
    }
    Ok(url)
}

/// Render `url` with every credential-bearing query value masked.
pub fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if SECRET_PARAMS.contains(&k.as_ref()) {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
