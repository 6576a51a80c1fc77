use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::debug;
use serde::Serialize;

use crate::client::GeoNames;
use crate::error::Result;
use crate::xml::{self, Element};

/// Shared handle to a place record.
///
/// Records are reference counted so one record can sit in a result
/// collection, in a parent's children list and in a caller's variable at the
/// same time. The crate is strictly single threaded (one blocking round trip
/// per service call), hence `Rc` rather than `Arc`.
pub type PlaceRef = Rc<Place>;

/// Timezone of a place as reported by the service.
///
/// Defaults to an empty name and zero offsets when the source fragment
/// carries no `timezone` element.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timezone {
    pub name: String,
    pub dst_offset: f64,
    pub gmt_offset: f64,
}

/// Parent link of a record.
///
/// `Back` is the navigational back-reference wired when a caller (or a
/// children fetch) attaches this record to a parent it already owns; it is
/// weak so a parent holding its children list never forms an ownership cycle.
/// `Chain` is the owning rootward link produced by hierarchy construction and
/// lazy resolution; chain links only point toward the root, so they cannot
/// cycle, and they keep a resolved ancestor chain alive after the response
/// collection it came from is dropped.
#[derive(Debug, Default)]
enum ParentLink {
    #[default]
    Unresolved,
    NoParent,
    Back(Weak<Place>),
    Chain(PlaceRef),
}

/// One geographic place returned by the service.
///
/// Scalar fields are immutable after construction; absent sub-elements fall
/// back to empty strings / zero rather than failing the parse. The parent
/// link and the children list are the only mutable state: each resolves at
/// most once (lazily, via [`Place::parent`] / [`Place::children`]) and is
/// memoized for the record's lifetime, unless a caller overwrites it
/// explicitly with [`Place::set_parent`] / [`Place::set_children`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub geoname_id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub country_name: String,
    /// Feature class, e.g. "P" for populated places.
    pub fcl: String,
    /// Feature code, e.g. "PPLC" for a capital.
    pub fcode: String,
    pub fcl_name: String,
    pub fcode_name: String,
    pub population: u64,
    pub admin_code1: String,
    pub admin_name1: String,
    pub admin_code2: String,
    pub admin_name2: String,
    pub timezone: Timezone,
    /// Localized names keyed by language code; empty when the fragment
    /// carries none.
    pub alternate_names: HashMap<String, String>,

    #[serde(skip)]
    parent: RefCell<ParentLink>,
    #[serde(skip)]
    children: RefCell<Option<Vec<PlaceRef>>>,
}

impl Place {
    /// Builds a record from a standalone XML fragment whose root element is
    /// the place itself (the shape of a `get` response).
    ///
    /// Fails only when the text is not well-formed XML; missing sub-elements
    /// default instead of erroring.
    pub fn from_xml(fragment: &str) -> Result<PlaceRef> {
        Ok(Self::from_element(&xml::parse_document(fragment)?))
    }

    /// Maps one parsed `<geoname>` element onto a fresh record.
    pub(crate) fn from_element(fragment: &Element) -> PlaceRef {
        let timezone = fragment
            .child("timezone")
            .map(|tz| Timezone {
                name: tz.text.clone(),
                dst_offset: lenient_f64(tz.attr("dstOffset")),
                gmt_offset: lenient_f64(tz.attr("gmtOffset")),
            })
            .unwrap_or_default();

        let mut alternate_names = HashMap::new();
        for alternate in fragment.children_named("alternateName") {
            // a missing lang attribute keys the name under ""
            alternate_names.insert(alternate.attr("lang").to_string(), alternate.text.clone());
        }

        Rc::new(Place {
            geoname_id: lenient_u64(fragment.child_text("geonameId")),
            name: fragment.child_text("name").to_string(),
            latitude: lenient_f64(fragment.child_text("lat")),
            longitude: lenient_f64(fragment.child_text("lng")),
            country_code: fragment.child_text("countryCode").to_string(),
            country_name: fragment.child_text("countryName").to_string(),
            fcl: fragment.child_text("fcl").to_string(),
            fcode: fragment.child_text("fcode").to_string(),
            fcl_name: fragment.child_text("fclName").to_string(),
            fcode_name: fragment.child_text("fcodeName").to_string(),
            population: lenient_u64(fragment.child_text("population")),
            admin_code1: fragment.child_text("AdminCode1").to_string(),
            admin_name1: fragment.child_text("AdminName1").to_string(),
            admin_code2: fragment.child_text("AdminCode2").to_string(),
            admin_name2: fragment.child_text("AdminName2").to_string(),
            timezone,
            alternate_names,
            parent: RefCell::new(ParentLink::Unresolved),
            children: RefCell::new(None),
        })
    }

    /// Localized name for a language code, if the service provided one.
    pub fn alternate_name(&self, lang: &str) -> Option<&str> {
        self.alternate_names.get(lang).map(String::as_str)
    }

    /// The root record of the whole hierarchy ("Earth", pinned at exactly
    /// lat/lng 0.0) has no ancestor by definition.
    pub fn is_root(&self) -> bool {
        self.name == "Earth" && self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Wires a navigational back-reference to `parent`.
    ///
    /// The link is weak: it resolves for as long as the caller (or the
    /// parent's own ancestor chain) keeps `parent` alive. Overwrites any
    /// previously resolved link.
    pub fn set_parent(&self, parent: &PlaceRef) {
        *self.parent.borrow_mut() = ParentLink::Back(Rc::downgrade(parent));
    }

    /// Wires an owning rootward link; used while assembling a hierarchy
    /// response so the chain survives the response collection.
    pub(crate) fn set_parent_chain(&self, parent: &PlaceRef) {
        *self.parent.borrow_mut() = ParentLink::Chain(Rc::clone(parent));
    }

    /// Returns this record's parent, resolving it on first access.
    ///
    /// Resolution fetches the full ancestor chain for this record's id, scans
    /// it leaf-most first for the entry matching this id and adopts that
    /// entry's construction-order parent. The outcome is memoized, "has no
    /// parent" included; a second call never fetches again. The root record
    /// short-circuits to `Ok(None)` without any network traffic.
    pub fn parent(&self, svc: &GeoNames) -> Result<Option<PlaceRef>> {
        if let Some(resolved) = self.resolved_parent() {
            return Ok(resolved);
        }
        if self.is_root() {
            return Ok(None);
        }

        debug!("resolving parent of {} via hierarchy", self.geoname_id);
        let chain = svc.hierarchy(self.geoname_id)?;
        let parent = chain
            .iter()
            .rev()
            .find(|entry| entry.geoname_id == self.geoname_id)
            .and_then(|entry| entry.assigned_parent());

        *self.parent.borrow_mut() = match &parent {
            Some(record) => ParentLink::Chain(Rc::clone(record)),
            None => ParentLink::NoParent,
        };
        Ok(parent)
    }

    /// Assigns the children list and wires every child's parent
    /// back-reference to this record, keeping both sides of the relation
    /// consistent at assignment time.
    pub fn set_children(self: &Rc<Self>, children: Vec<PlaceRef>) {
        for child in &children {
            child.set_parent(self);
        }
        *self.children.borrow_mut() = Some(children);
    }

    /// Returns this record's children, fetching them on first access.
    ///
    /// Fetched children are routed through [`Place::set_children`], so each
    /// child's parent back-reference points at this record. An empty list is
    /// a valid resolved state and is memoized like any other.
    pub fn children(self: &Rc<Self>, svc: &GeoNames) -> Result<Vec<PlaceRef>> {
        if let Some(resolved) = self.children.borrow().as_ref() {
            return Ok(resolved.clone());
        }

        debug!("resolving children of {}", self.geoname_id);
        let fetched: Vec<PlaceRef> = svc.children(self.geoname_id)?.into_iter().collect();
        self.set_children(fetched.clone());
        Ok(fetched)
    }

    /// Memoization state of the parent link, without triggering resolution.
    fn resolved_parent(&self) -> Option<Option<PlaceRef>> {
        match &*self.parent.borrow() {
            ParentLink::Unresolved => None,
            ParentLink::NoParent => Some(None),
            ParentLink::Back(weak) => Some(weak.upgrade()),
            ParentLink::Chain(record) => Some(Some(Rc::clone(record))),
        }
    }

    /// Already-assigned parent, if any; never fetches.
    fn assigned_parent(&self) -> Option<PlaceRef> {
        self.resolved_parent().flatten()
    }
}

/// Document-ordered collection of place records, addressable by id.
///
/// `hierarchy`, `children` and `search` all return one of these. Lookup is a
/// linear scan: a response holds at most a few hundred rows.
#[derive(Debug, Default)]
pub struct Places {
    records: Vec<PlaceRef>,
}

impl Places {
    pub(crate) fn new() -> Self {
        Places::default()
    }

    /// Appends a record; a record with an already-present id replaces the
    /// earlier one in place, keeping its original position.
    pub(crate) fn insert(&mut self, record: PlaceRef) {
        match self
            .records
            .iter()
            .position(|existing| existing.geoname_id == record.geoname_id)
        {
            Some(at) => self.records[at] = record,
            None => self.records.push(record),
        }
    }

    /// Record with the given id, if present.
    pub fn get(&self, geoname_id: u64) -> Option<&PlaceRef> {
        self.records.iter().find(|r| r.geoname_id == geoname_id)
    }

    /// All records in document order.
    pub fn records(&self) -> &[PlaceRef] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRef> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record in document order (for `hierarchy`: the root-most entry).
    pub fn first(&self) -> Option<&PlaceRef> {
        self.records.first()
    }

    /// Last record in document order (for `hierarchy`: the record itself).
    pub fn last(&self) -> Option<&PlaceRef> {
        self.records.last()
    }
}

impl IntoIterator for Places {
    type Item = PlaceRef;
    type IntoIter = std::vec::IntoIter<PlaceRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Places {
    type Item = &'a PlaceRef;
    type IntoIter = std::slice::Iter<'a, PlaceRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `intval`-style coercion: leading digits parse, anything else is 0.
fn lenient_u64(text: &str) -> u64 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// `floatval`-style coercion: the longest numeric prefix parses, anything
/// else is 0.0.
fn lenient_f64(text: &str) -> f64 {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse() {
        return value;
    }
    let prefix: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .collect();
    prefix.parse().unwrap_or(0.0)
}
