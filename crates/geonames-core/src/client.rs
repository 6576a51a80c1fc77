// crates/geonames-core/src/client.rs

//! Gateway to a geonames-compatible web service.
//!
//! Every operation is one blocking HTTP GET followed by XML mapping. The
//! client keeps no state beyond its base URL and transport; calls are
//! independent and can be repeated freely.

use std::fmt;

use log::debug;
use url::Url;

use crate::error::{GeoNamesError, Result};
use crate::model::{Place, PlaceRef, Places};
use crate::xml::{self, Element};

/// Endpoint the client talks to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://ws.geonames.org/";

/// Row cap applied when a search does not specify one.
pub const DEFAULT_SEARCH_ROWS: u32 = 100;

// -----------------------------------------------------------------------------
// TRANSPORT
// -----------------------------------------------------------------------------

/// Fetches one URL and returns the response body.
///
/// The default implementation performs a blocking HTTP GET via `reqwest`;
/// tests substitute a canned-response implementation through
/// [`GeoNames::with_transport`].
pub trait Transport {
    fn fetch(&self, url: &Url) -> Result<String>;
}

struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoNamesError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

// -----------------------------------------------------------------------------
// CLIENT
// -----------------------------------------------------------------------------

/// Stateless gateway to the geonames web service.
///
/// Offers the four service operations: [`get`](GeoNames::get),
/// [`hierarchy`](GeoNames::hierarchy), [`children`](GeoNames::children) and
/// [`search`](GeoNames::search). Each validates its input, performs a single
/// blocking round trip and maps every `<geoname>` element of the response
/// onto a [`Place`].
pub struct GeoNames {
    base_url: Url,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for GeoNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoNames")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Default for GeoNames {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoNames {
    /// Client against the public endpoint, [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL).expect("default endpoint configuration is valid")
    }

    /// Client against a custom geonames-compatible endpoint.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GeoNamesError::invalid(format!("base URL {base_url:?}: {e}")))?;
        Ok(GeoNames {
            base_url,
            transport: Box::new(HttpTransport {
                http: reqwest::blocking::Client::new(),
            }),
        })
    }

    /// Client with a substituted transport; test hook.
    #[doc(hidden)]
    pub fn with_transport(base_url: &str, transport: Box<dyn Transport>) -> Result<Self> {
        let mut svc = Self::with_base_url(base_url)?;
        svc.transport = transport;
        Ok(svc)
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // SERVICE OPERATIONS
    // -------------------------------------------------------------------------

    /// Fetches all data for a single id. The response's root element is the
    /// record itself, so exactly one record comes back.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geonames_core::GeoNames;
    ///
    /// let svc = GeoNames::new();
    /// let copenhagen = svc.get(2618425)?;
    /// assert_eq!(copenhagen.name, "Copenhagen");
    /// # geonames_core::Result::Ok(())
    /// ```
    pub fn get(&self, id: u64) -> Result<PlaceRef> {
        require_id(id, "get")?;
        let id = id.to_string();
        let document = self.fetch_document("get", &[("geonameId", &id)])?;
        Ok(Place::from_element(&document))
    }

    /// Fetches the ordered ancestor chain for an id, root-most entry first.
    ///
    /// Records are built in document order and every record's parent link is
    /// wired to its predecessor, yielding a singly linked rootward chain (the
    /// first entry keeps no parent).
    pub fn hierarchy(&self, id: u64) -> Result<Places> {
        require_id(id, "hierarchy")?;
        let id = id.to_string();
        let document = self.fetch_document("hierarchy", &[("geonameId", &id)])?;

        let mut results = Places::new();
        let mut previous: Option<PlaceRef> = None;
        for fragment in document.children_named("geoname") {
            let record = Place::from_element(fragment);
            if let Some(parent) = &previous {
                record.set_parent_chain(parent);
            }
            previous = Some(record.clone());
            results.insert(record);
        }
        debug!("hierarchy({id}): {} records", results.len());
        Ok(results)
    }

    /// Fetches the direct children of an id, in document order.
    ///
    /// No parent links are wired here; callers attach the records themselves
    /// when they already hold the parent (see [`Place::set_children`]).
    pub fn children(&self, id: u64) -> Result<Places> {
        require_id(id, "children")?;
        let id = id.to_string();
        let document = self.fetch_document("children", &[("geonameId", &id)])?;
        let results = collect_records(&document);
        debug!("children({id}): {} records", results.len());
        Ok(results)
    }

    /// Searches places by term with the default row cap of
    /// [`DEFAULT_SEARCH_ROWS`].
    pub fn search(&self, term: &str) -> Result<Places> {
        self.search_rows(term, DEFAULT_SEARCH_ROWS)
    }

    /// Searches places by term, returning at most `max_rows` records.
    ///
    /// The term must be non-empty; a `max_rows` of zero falls back to the
    /// default cap. Zero matches yield an empty collection, not an error.
    pub fn search_rows(&self, term: &str, max_rows: u32) -> Result<Places> {
        if term.is_empty() {
            return Err(GeoNamesError::invalid("search requires a non-empty term"));
        }
        let rows = if max_rows == 0 {
            DEFAULT_SEARCH_ROWS
        } else {
            max_rows
        };
        let rows = rows.to_string();
        let document = self.fetch_document("search", &[("q", term), ("maxRows", &rows)])?;
        let results = collect_records(&document);
        debug!("search({term:?}): {} records", results.len());
        Ok(results)
    }

    // -------------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPERS
    // -------------------------------------------------------------------------

    /// Builds the request URL for an operation, always asking for FULL style.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| GeoNamesError::invalid(format!("endpoint path {path:?}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("style", "FULL");
        }
        Ok(url)
    }

    /// One round trip: build URL, fetch, parse the body into an element tree.
    fn fetch_document(&self, path: &str, params: &[(&str, &str)]) -> Result<Element> {
        let url = self.endpoint(path, params)?;
        debug!("GET {url}");
        let body = self.transport.fetch(&url)?;
        xml::parse_document(&body)
    }
}

/// Rejects ids the service cannot address. Zero is the only representable
/// invalid value; the signed/non-numeric cases are ruled out by the type.
fn require_id(id: u64, operation: &str) -> Result<()> {
    if id == 0 {
        return Err(GeoNamesError::invalid(format!(
            "{operation} requires a positive geonameId"
        )));
    }
    Ok(())
}

/// Maps every `<geoname>` child of a response document, skipping unrelated
/// siblings such as `<totalResultsCount>`.
fn collect_records(document: &Element) -> Places {
    let mut results = Places::new();
    for fragment in document.children_named("geoname") {
        results.insert(Place::from_element(fragment));
    }
    results
}
