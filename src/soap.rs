/// SOAP 1.1 envelope codec for the e-Boekhouden service.
///
/// Renders request envelopes from `serde_json::Value` parameter maps and
/// parses response envelopes back into `Value` trees, so the rest of the
/// SDK works with plain key/value data the way the service's own result
/// envelopes are shaped. Also hosts the error-descriptor rule applied to
/// every result envelope.
use std::fmt;

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::errors::EboekhoudenError;

/// XML namespace of the e-Boekhouden SOAP service.
pub const SERVICE_NS: &str = "http://www.e-boekhouden.nl/soap";

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Remote procedure names of the e-Boekhouden SOAP service.
///
/// Each variant maps 1:1 to a single remote call with a fixed
/// request/response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapAction {
    OpenSession,
    OpenSessionSub,
    CloseSession,
    GetAdministraties,
    GetArtikelen,
    GetFacturen,
    GetGrootboekrekeningen,
    GetKostenplaatsen,
    GetMutaties,
    GetOpenPosten,
    GetRelaties,
    GetSaldi,
    GetSaldo,
    AddFactuur,
    AddGrootboekrekening,
    AddMutatie,
    AddRelatie,
    UpdateGrootboekrekening,
    UpdateRelatie,
}

impl SoapAction {
    /// The wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoapAction::OpenSession => "OpenSession",
            SoapAction::OpenSessionSub => "OpenSessionSub",
            SoapAction::CloseSession => "CloseSession",
            SoapAction::GetAdministraties => "GetAdministraties",
            SoapAction::GetArtikelen => "GetArtikelen",
            SoapAction::GetFacturen => "GetFacturen",
            SoapAction::GetGrootboekrekeningen => "GetGrootboekrekeningen",
            SoapAction::GetKostenplaatsen => "GetKostenplaatsen",
            SoapAction::GetMutaties => "GetMutaties",
            SoapAction::GetOpenPosten => "GetOpenPosten",
            SoapAction::GetRelaties => "GetRelaties",
            SoapAction::GetSaldi => "GetSaldi",
            SoapAction::GetSaldo => "GetSaldo",
            SoapAction::AddFactuur => "AddFactuur",
            SoapAction::AddGrootboekrekening => "AddGrootboekrekening",
            SoapAction::AddMutatie => "AddMutatie",
            SoapAction::AddRelatie => "AddRelatie",
            SoapAction::UpdateGrootboekrekening => "UpdateGrootboekrekening",
            SoapAction::UpdateRelatie => "UpdateRelatie",
        }
    }

    /// The value of the `SOAPAction` HTTP header for this operation.
    pub fn header_uri(&self) -> String {
        format!("{}/{}", SERVICE_NS, self.as_str())
    }
}

impl fmt::Display for SoapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request rendering
// ---------------------------------------------------------------------------

/// Render a full SOAP 1.1 request envelope for `action` with the given
/// parameter map as the operation body.
///
/// Objects become nested elements, arrays repeat their element name, and
/// `Null` values are omitted.
pub fn build_envelope(action: SoapAction, params: &Value) -> String {
    let mut body = String::new();
    if let Value::Object(map) = params {
        for (name, value) in map {
            write_element(&mut body, name, value);
        }
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap=\"{SOAP_ENV_NS}\">\
         <soap:Body>\
         <{action} xmlns=\"{SERVICE_NS}\">{body}</{action}>\
         </soap:Body>\
         </soap:Envelope>"
    )
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item);
            }
        }
        Value::Object(map) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            for (child_name, child) in map {
                write_element(out, child_name, child);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Value::String(s) => write_leaf(out, name, &escape(s.as_str())),
        other => write_leaf(out, name, &other.to_string()),
    }
}

fn write_leaf(out: &mut String, name: &str, text: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parse a response document and return the call result envelope: the
/// content of the `{Action}Response` element inside the SOAP body, i.e. a
/// mapping with the single `{Action}Result` key.
///
/// An empty response element yields `Value::Null`. A SOAP fault is
/// reported as a transport error carrying the fault string.
pub fn parse_result_envelope(xml: &str) -> Result<Value, EboekhoudenError> {
    let root = document_to_value(xml)?;
    let body = root
        .get("Envelope")
        .and_then(|envelope| envelope.get("Body"))
        .ok_or_else(|| EboekhoudenError::Xml("response has no SOAP body".into()))?;

    if let Some(fault) = body.get("Fault") {
        let reason = fault
            .get("faultstring")
            .and_then(Value::as_str)
            .unwrap_or("SOAP fault");
        return Err(EboekhoudenError::Transport(reason.to_string()));
    }

    match body {
        Value::Object(children) => {
            let (_, response) = children
                .iter()
                .next()
                .ok_or_else(|| EboekhoudenError::Xml("empty SOAP body".into()))?;
            Ok(response.clone())
        }
        Value::Null => Ok(Value::Null),
        _ => Err(EboekhoudenError::Xml("unexpected SOAP body shape".into())),
    }
}

/// Parse an XML document into a single-key `{root_name: value}` map.
///
/// Element text becomes `String`, child elements become objects keyed by
/// local name, repeated siblings collapse into arrays, and empty elements
/// become `Null`. Namespace prefixes and attributes are dropped; the
/// service carries all data in element content.
pub fn document_to_value(xml: &str) -> Result<Value, EboekhoudenError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| EboekhoudenError::Xml(e.to_string()))?;
        match event {
            Event::Start(start) => {
                stack.push(Frame {
                    name: local_name(start.local_name().as_ref()),
                    text: String::new(),
                    children: Map::new(),
                });
            }
            Event::Empty(start) => {
                let name = local_name(start.local_name().as_ref());
                attach(&mut stack, &mut root, name, Value::Null);
            }
            Event::Text(text) => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| EboekhoudenError::Xml(e.to_string()))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| EboekhoudenError::Xml("unbalanced end tag".into()))?;
                let (name, value) = frame.into_value();
                attach(&mut stack, &mut root, name, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match root {
        Some(value) if stack.is_empty() => Ok(value),
        _ => Err(EboekhoudenError::Xml("truncated XML document".into())),
    }
}

/// One open element during the streaming parse.
struct Frame {
    name: String,
    text: String,
    children: Map<String, Value>,
}

impl Frame {
    fn into_value(self) -> (String, Value) {
        let value = if !self.children.is_empty() {
            Value::Object(self.children)
        } else if !self.text.trim().is_empty() {
            Value::String(self.text.trim().to_string())
        } else {
            Value::Null
        };
        (self.name, value)
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn attach(stack: &mut [Frame], root: &mut Option<Value>, name: String, value: Value) {
    if let Some(parent) = stack.last_mut() {
        insert_child(&mut parent.children, name, value);
    } else {
        let mut map = Map::new();
        map.insert(name, value);
        *root = Some(Value::Object(map));
    }
}

/// Merge a child into its parent's map, collapsing repeated element names
/// into an array in document order.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Error detection
// ---------------------------------------------------------------------------

/// Apply the service's embedded error rule to a result envelope.
///
/// The envelope maps a single result key to a payload that may carry an
/// `ErrorMsg { LastErrorCode, LastErrorDescription }` descriptor. A
/// non-empty code or description fails the call regardless of
/// transport-level success, with `"UNKNOWN"` standing in for whichever
/// field is absent.
pub fn check_error_descriptor(result: &Value, operation: &str) -> Result<(), EboekhoudenError> {
    let Some(envelope) = result.as_object() else {
        return Ok(());
    };
    let Some((_, payload)) = envelope.iter().next() else {
        return Ok(());
    };
    let Some(error_msg) = payload.get("ErrorMsg") else {
        return Ok(());
    };

    let code = error_msg
        .get("LastErrorCode")
        .and_then(Value::as_str)
        .unwrap_or("");
    let description = error_msg
        .get("LastErrorDescription")
        .and_then(Value::as_str)
        .unwrap_or("");

    if code.is_empty() && description.is_empty() {
        return Ok(());
    }

    Err(EboekhoudenError::RemoteOperation {
        operation: operation.to_string(),
        code: if code.is_empty() { "UNKNOWN" } else { code }.to_string(),
        description: if description.is_empty() {
            "UNKNOWN"
        } else {
            description
        }
        .to_string(),
    })
}
