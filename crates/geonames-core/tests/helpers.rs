// Shared fixtures and the canned-response transport used by the integration
// tests. The fixtures model a real Earth > Europe > Denmark > Copenhagen
// hierarchy in the service's FULL response style, unrecognized sibling
// elements included.

// Each test file imports the subset it needs.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use geonames_core::{GeoNames, GeoNamesError, Result, Transport};
use url::Url;

pub const EARTH_ID: u64 = 6295630;
pub const EUROPE_ID: u64 = 6255148;
pub const DENMARK_ID: u64 = 2623032;
pub const COPENHAGEN_ID: u64 = 2618425;

/// Transport that answers from a canned path?query -> body table and records
/// every request it sees. Clones share state, so tests can keep one handle
/// while the service owns the other.
#[derive(Clone, Default)]
pub struct FixtureTransport {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    responses: RefCell<HashMap<String, String>>,
    requests: RefCell<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path_and_query: &str, body: &str) -> &Self {
        self.inner
            .responses
            .borrow_mut()
            .insert(path_and_query.to_string(), body.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.borrow().clone()
    }
}

impl Transport for FixtureTransport {
    fn fetch(&self, url: &Url) -> Result<String> {
        let key = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        self.inner.requests.borrow_mut().push(key.clone());
        self.inner
            .responses
            .borrow()
            .get(&key)
            .cloned()
            .ok_or(GeoNamesError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Service wired to the given fixture transport.
pub fn service(transport: &FixtureTransport) -> GeoNames {
    GeoNames::with_transport("http://geonames.test/", Box::new(transport.clone()))
        .expect("test base URL is valid")
}

// Request keys as the client builds them.

pub fn get_key(id: u64) -> String {
    format!("/get?geonameId={id}&style=FULL")
}

pub fn hierarchy_key(id: u64) -> String {
    format!("/hierarchy?geonameId={id}&style=FULL")
}

pub fn children_key(id: u64) -> String {
    format!("/children?geonameId={id}&style=FULL")
}

pub fn search_key(encoded_term: &str, rows: u32) -> String {
    format!("/search?q={encoded_term}&maxRows={rows}&style=FULL")
}

// Response bodies.

pub const COPENHAGEN_GET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geoname>
  <toponymName>Copenhagen</toponymName>
  <name>Copenhagen</name>
  <lat>55.67594</lat>
  <lng>12.56553</lng>
  <geonameId>2618425</geonameId>
  <countryCode>DK</countryCode>
  <countryName>Denmark</countryName>
  <fcl>P</fcl>
  <fcode>PPLC</fcode>
  <fclName>city, village,...</fclName>
  <fcodeName>capital of a political entity</fcodeName>
  <population>1153615</population>
  <AdminCode1>17</AdminCode1>
  <AdminName1>Capital Region</AdminName1>
  <AdminCode2>101</AdminCode2>
  <AdminName2>Copenhagen municipality</AdminName2>
  <timezone dstOffset="2.0" gmtOffset="1.0">Europe/Copenhagen</timezone>
  <alternateName lang="da">K&#248;benhavn</alternateName>
  <alternateName lang="en">Copenhagen</alternateName>
</geoname>
"#;

pub const DENMARK_GET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geoname>
  <toponymName>Kingdom of Denmark</toponymName>
  <name>Denmark</name>
  <lat>56</lat>
  <lng>10</lng>
  <geonameId>2623032</geonameId>
  <countryCode>DK</countryCode>
  <countryName>Denmark</countryName>
  <fcl>A</fcl>
  <fcode>PCLI</fcode>
  <fclName>country, state, region,...</fclName>
  <fcodeName>independent political entity</fcodeName>
  <population>5484723</population>
  <timezone dstOffset="2.0" gmtOffset="1.0">Europe/Copenhagen</timezone>
  <alternateName lang="da">Danmark</alternateName>
</geoname>
"#;

/// The root record: no timezone element, no alternate names.
pub const EARTH_GET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geoname>
  <toponymName>Earth</toponymName>
  <name>Earth</name>
  <lat>0</lat>
  <lng>0</lng>
  <geonameId>6295630</geonameId>
  <fcl>L</fcl>
  <fcode>AREA</fcode>
  <fclName>parks,area, ...</fclName>
  <fcodeName>area</fcodeName>
  <population>6814400000</population>
</geoname>
"#;

pub const COPENHAGEN_HIERARCHY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geonames style="FULL">
  <geoname>
    <toponymName>Earth</toponymName>
    <name>Earth</name>
    <lat>0</lat>
    <lng>0</lng>
    <geonameId>6295630</geonameId>
    <fcl>L</fcl>
    <fcode>AREA</fcode>
  </geoname>
  <geoname>
    <toponymName>Europe</toponymName>
    <name>Europe</name>
    <lat>48.69096</lat>
    <lng>9.14062</lng>
    <geonameId>6255148</geonameId>
    <fcl>L</fcl>
    <fcode>CONT</fcode>
  </geoname>
  <geoname>
    <toponymName>Kingdom of Denmark</toponymName>
    <name>Denmark</name>
    <lat>56</lat>
    <lng>10</lng>
    <geonameId>2623032</geonameId>
    <countryCode>DK</countryCode>
    <countryName>Denmark</countryName>
    <fcl>A</fcl>
    <fcode>PCLI</fcode>
    <timezone dstOffset="2.0" gmtOffset="1.0">Europe/Copenhagen</timezone>
  </geoname>
  <geoname>
    <toponymName>Copenhagen</toponymName>
    <name>Copenhagen</name>
    <lat>55.67594</lat>
    <lng>12.56553</lng>
    <geonameId>2618425</geonameId>
    <countryCode>DK</countryCode>
    <countryName>Denmark</countryName>
    <fcl>P</fcl>
    <fcode>PPLC</fcode>
    <timezone dstOffset="2.0" gmtOffset="1.0">Europe/Copenhagen</timezone>
  </geoname>
</geonames>
"#;

pub const DENMARK_CHILDREN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geonames style="FULL">
  <totalResultsCount>2</totalResultsCount>
  <geoname>
    <toponymName>Capital Region</toponymName>
    <name>Capital Region</name>
    <lat>55.83333</lat>
    <lng>12.33333</lng>
    <geonameId>6418538</geonameId>
    <countryCode>DK</countryCode>
    <countryName>Denmark</countryName>
    <fcl>A</fcl>
    <fcode>ADM1</fcode>
    <AdminCode1>17</AdminCode1>
    <AdminName1>Capital Region</AdminName1>
  </geoname>
  <geoname>
    <toponymName>Central Jutland</toponymName>
    <name>Central Jutland</name>
    <lat>56.16667</lat>
    <lng>9.5</lng>
    <geonameId>6418539</geonameId>
    <countryCode>DK</countryCode>
    <countryName>Denmark</countryName>
    <fcl>A</fcl>
    <fcode>ADM1</fcode>
    <AdminCode1>18</AdminCode1>
    <AdminName1>Central Jutland</AdminName1>
  </geoname>
</geonames>
"#;

pub const NEW_YORK_SEARCH: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geonames style="FULL">
  <totalResultsCount>3241</totalResultsCount>
  <geoname>
    <toponymName>New York</toponymName>
    <name>New York</name>
    <lat>40.71427</lat>
    <lng>-74.00597</lng>
    <geonameId>5128581</geonameId>
    <countryCode>US</countryCode>
    <countryName>United States</countryName>
    <fcl>P</fcl>
    <fcode>PPL</fcode>
    <population>8175133</population>
    <timezone dstOffset="-4.0" gmtOffset="-5.0">America/New_York</timezone>
    <alternateName lang="es">Nueva York</alternateName>
  </geoname>
  <geoname>
    <toponymName>New York</toponymName>
    <name>New York</name>
    <lat>43.00035</lat>
    <lng>-75.4999</lng>
    <geonameId>5128638</geonameId>
    <countryCode>US</countryCode>
    <countryName>United States</countryName>
    <fcl>A</fcl>
    <fcode>ADM1</fcode>
    <population>19274244</population>
  </geoname>
</geonames>
"#;

pub const EMPTY_RESULTS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<geonames style="FULL">
  <totalResultsCount>0</totalResultsCount>
</geonames>
"#;
