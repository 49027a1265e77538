//! `GetDepots` response parsing.
//!
//! The service wraps its answer in a SOAP envelope. Everything we read lives
//! in the service namespace:
//!
//! ```text
//! soap:Envelope/soap:Body/GetDepotsResponse/...
//!     callResult/Status          one per response
//!     callResult/ErrorMessage    optional
//!     .../Depot/DepotCode        zero or more depots
//!     .../Depot/DepotName
//! ```
//!
//! Elements are matched by namespace and local name at any depth, so the
//! exact wrapper elements the service uses do not matter.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::envelope::SOAP_NS;
use crate::error::{DepotError, Result};

/// A depot as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depot {
    pub depot_code: String,
    pub depot_name: String,
}

/// Parsed `GetDepots` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotsResponse {
    /// Service status text, e.g. `Success`.
    pub status: String,
    pub error_message: Option<String>,
    pub depots: Vec<Depot>,
}

impl DepotsResponse {
    /// Status text the service uses for a successful call.
    pub const SUCCESS: &'static str = "Success";

    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case(Self::SUCCESS)
    }

    /// [`DepotError::Protocol`] with the service's error message unless the
    /// status is `Success`.
    pub fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(DepotError::protocol(format!(
            "service status {}: {}",
            self.status,
            self.error_message.as_deref().unwrap_or("no error message")
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Soap,
    Service,
    Other,
}

#[derive(Default)]
struct PartialDepot {
    code: Option<String>,
    name: Option<String>,
}

#[derive(Default)]
struct Collector {
    seen_root: bool,
    text: String,
    status: Option<String>,
    error_message: Option<String>,
    depots: Vec<Depot>,
    current: Option<PartialDepot>,
    fault: Option<(String, String)>,
    in_fault: bool,
}

impl Collector {
    fn open(&mut self, scope: Scope, name: &[u8]) -> Result<()> {
        if !self.seen_root {
            if scope != Scope::Soap || name != b"Envelope" {
                return Err(DepotError::protocol(format!(
                    "expected soap:Envelope root, found <{}>",
                    String::from_utf8_lossy(name)
                )));
            }
            self.seen_root = true;
        }
        self.text.clear();
        match (scope, name) {
            (Scope::Service, b"Depot") => self.current = Some(PartialDepot::default()),
            (Scope::Soap, b"Fault") => {
                self.in_fault = true;
                self.fault = Some((String::new(), String::new()));
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, scope: Scope, name: &[u8]) {
        let text = std::mem::take(&mut self.text).trim().to_string();
        match (scope, name) {
            (Scope::Service, b"Status") if self.status.is_none() => self.status = Some(text),
            (Scope::Service, b"ErrorMessage") if !text.is_empty() => {
                self.error_message = Some(text);
            }
            (Scope::Service, b"DepotCode") => {
                if let Some(depot) = self.current.as_mut() {
                    depot.code = Some(text);
                }
            }
            (Scope::Service, b"DepotName") => {
                if let Some(depot) = self.current.as_mut() {
                    depot.name = Some(text);
                }
            }
            (Scope::Service, b"Depot") => {
                if let Some(depot) = self.current.take() {
                    match (depot.code, depot.name) {
                        (Some(depot_code), Some(depot_name)) => self.depots.push(Depot {
                            depot_code,
                            depot_name,
                        }),
                        _ => warn!("skipping depot without DepotCode/DepotName"),
                    }
                }
            }
            (Scope::Soap, b"Fault") => self.in_fault = false,
            (_, b"faultcode") if self.in_fault => {
                if let Some(fault) = self.fault.as_mut() {
                    fault.0 = text;
                }
            }
            (_, b"faultstring") if self.in_fault => {
                if let Some(fault) = self.fault.as_mut() {
                    fault.1 = text;
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Result<DepotsResponse> {
        if !self.seen_root {
            return Err(DepotError::protocol("empty response document"));
        }
        if let Some((code, message)) = self.fault {
            return Err(DepotError::Fault { code, message });
        }
        let status = self
            .status
            .ok_or_else(|| DepotError::protocol("response has no Status element"))?;
        Ok(DepotsResponse {
            status,
            error_message: self.error_message,
            depots: self.depots,
        })
    }
}

fn scope_of(resolved: &ResolveResult<'_>, namespace: &str) -> Scope {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) if *ns == SOAP_NS.as_bytes() => Scope::Soap,
        ResolveResult::Bound(Namespace(ns)) if *ns == namespace.as_bytes() => Scope::Service,
        _ => Scope::Other,
    }
}

fn local_name(element: &BytesStart<'_>) -> Vec<u8> {
    element.local_name().as_ref().to_vec()
}

/// Parse a `GetDepots` response body.
///
/// A SOAP fault is returned as [`DepotError::Fault`]; anything that is not a
/// SOAP envelope with a service `Status` is a [`DepotError::Protocol`].
pub fn parse_get_depots_response(xml: &str, namespace: &str) -> Result<DepotsResponse> {
    let mut reader = NsReader::from_str(xml);
    let mut collector = Collector::default();
    let mut stack: Vec<(Scope, Vec<u8>)> = Vec::new();

    loop {
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|e| DepotError::protocol(format!("malformed XML: {e}")))?;
        match event {
            Event::Start(element) => {
                let scope = scope_of(&resolved, namespace);
                let name = local_name(&element);
                collector.open(scope, &name)?;
                stack.push((scope, name));
            }
            Event::Empty(element) => {
                let scope = scope_of(&resolved, namespace);
                let name = local_name(&element);
                collector.open(scope, &name)?;
                collector.close(scope, &name);
            }
            Event::End(_) => {
                let (scope, name) = stack
                    .pop()
                    .ok_or_else(|| DepotError::protocol("unbalanced end tag"))?;
                collector.close(scope, &name);
            }
            Event::Text(text) => {
                let decoded = text.decode().map_err(DepotError::protocol)?;
                let unescaped =
                    quick_xml::escape::unescape(&decoded).map_err(DepotError::protocol)?;
                collector.text.push_str(&unescaped);
            }
            Event::CData(data) => {
                let decoded = data.decode().map_err(DepotError::protocol)?;
                collector.text.push_str(&decoded);
            }
            Event::GeneralRef(reference) => {
                if let Some(ch) = reference.resolve_char_ref().map_err(DepotError::protocol)? {
                    collector.text.push(ch);
                } else {
                    let name = reference.decode().map_err(DepotError::protocol)?;
                    let value = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| {
                            DepotError::protocol(format!("unknown entity &{name};"))
                        })?;
                    collector.text.push_str(value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(DepotError::protocol("document ended inside an element"));
    }
    collector.finish()
}
