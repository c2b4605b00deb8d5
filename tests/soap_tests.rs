/// Unit tests for the SOAP envelope codec.
///
/// Covers request rendering, response parsing into value trees, and the
/// embedded error-descriptor rule.
use serde_json::{json, Value};

use eboekhouden_sdk::soap::{
    build_envelope, check_error_descriptor, document_to_value, parse_result_envelope,
    SoapAction, SERVICE_NS,
};
use eboekhouden_sdk::EboekhoudenError;

#[test]
fn test_action_wire_names() {
    assert_eq!(SoapAction::OpenSession.as_str(), "OpenSession");
    assert_eq!(SoapAction::OpenSessionSub.as_str(), "OpenSessionSub");
    assert_eq!(SoapAction::GetRelaties.as_str(), "GetRelaties");
    assert_eq!(
        SoapAction::UpdateGrootboekrekening.as_str(),
        "UpdateGrootboekrekening"
    );
    assert_eq!(SoapAction::GetRelaties.to_string(), "GetRelaties");
}

#[test]
fn test_action_header_uri() {
    assert_eq!(
        SoapAction::GetMutaties.header_uri(),
        "http://www.e-boekhouden.nl/soap/GetMutaties"
    );
}

#[test]
fn test_build_envelope_wraps_action_in_service_namespace() {
    let envelope = build_envelope(SoapAction::GetRelaties, &json!({}));
    assert!(envelope.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(envelope.contains(&format!("<GetRelaties xmlns=\"{SERVICE_NS}\"></GetRelaties>")));
    assert!(envelope.contains("<soap:Body>"));
}

#[test]
fn test_build_envelope_renders_nested_parameters() {
    let params = json!({
        "SessionID": "abc-123",
        "cFilter": { "Code": "DEB001", "ID": 7 }
    });
    let envelope = build_envelope(SoapAction::GetRelaties, &params);
    assert!(envelope.contains("<SessionID>abc-123</SessionID>"));
    assert!(envelope.contains("<cFilter><Code>DEB001</Code><ID>7</ID></cFilter>"));
}

#[test]
fn test_build_envelope_escapes_text() {
    let params = json!({ "Omschrijving": "Büro & <Zaak> \"BV\"" });
    let envelope = build_envelope(SoapAction::AddRelatie, &params);
    assert!(envelope.contains("Büro &amp; &lt;Zaak&gt;"));
    assert!(!envelope.contains("<Zaak>"));
}

#[test]
fn test_build_envelope_repeats_array_elements() {
    let params = json!({ "Regels": { "cFactuurRegel": [
        { "Code": "A" },
        { "Code": "B" }
    ]}});
    let envelope = build_envelope(SoapAction::AddFactuur, &params);
    let first = envelope.find("<cFactuurRegel><Code>A</Code></cFactuurRegel>");
    let second = envelope.find("<cFactuurRegel><Code>B</Code></cFactuurRegel>");
    assert!(first.is_some());
    assert!(second.is_some());
    assert!(first < second);
}

#[test]
fn test_build_envelope_omits_null_parameters() {
    let params = json!({ "Code": "X", "Absent": null });
    let envelope = build_envelope(SoapAction::GetRelaties, &params);
    assert!(envelope.contains("<Code>X</Code>"));
    assert!(!envelope.contains("Absent"));
}

fn response(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>{body}</soap:Body></soap:Envelope>"
    )
}

#[test]
fn test_parse_result_envelope_returns_single_result_key() {
    let xml = response(
        "<GetRelatiesResponse xmlns=\"http://www.e-boekhouden.nl/soap\">\
         <GetRelatiesResult>\
         <ErrorMsg><LastErrorCode/><LastErrorDescription/></ErrorMsg>\
         <Relaties><cRelatie><ID>1</ID><Code>REL1</Code></cRelatie>\
         <cRelatie><ID>2</ID><Code>REL2</Code></cRelatie></Relaties>\
         </GetRelatiesResult></GetRelatiesResponse>",
    );
    let envelope = parse_result_envelope(&xml).unwrap();
    let result = envelope.get("GetRelatiesResult").unwrap();
    let items = result
        .get("Relaties")
        .and_then(|r| r.get("cRelatie"))
        .unwrap();
    assert!(items.is_array());
    assert_eq!(items.as_array().unwrap().len(), 2);
    assert_eq!(items[0]["Code"], json!("REL1"));
    // Leaf values come back as text.
    assert_eq!(items[1]["ID"], json!("2"));
}

#[test]
fn test_parse_result_envelope_single_item_stays_object() {
    let xml = response(
        "<GetRelatiesResponse><GetRelatiesResult>\
         <Relaties><cRelatie><ID>1</ID></cRelatie></Relaties>\
         </GetRelatiesResult></GetRelatiesResponse>",
    );
    let envelope = parse_result_envelope(&xml).unwrap();
    let items = &envelope["GetRelatiesResult"]["Relaties"]["cRelatie"];
    assert!(items.is_object());
}

#[test]
fn test_parse_result_envelope_empty_collection_is_null() {
    let xml = response(
        "<GetRelatiesResponse><GetRelatiesResult>\
         <ErrorMsg><LastErrorCode/><LastErrorDescription/></ErrorMsg>\
         <Relaties/></GetRelatiesResult></GetRelatiesResponse>",
    );
    let envelope = parse_result_envelope(&xml).unwrap();
    assert_eq!(envelope["GetRelatiesResult"]["Relaties"], Value::Null);
}

#[test]
fn test_parse_result_envelope_empty_response_is_null() {
    let xml = response("<CloseSessionResponse/>");
    let envelope = parse_result_envelope(&xml).unwrap();
    assert!(envelope.is_null());
}

#[test]
fn test_parse_result_envelope_reports_fault_as_transport_error() {
    let xml = response(
        "<soap:Fault><faultcode>soap:Server</faultcode>\
         <faultstring>Server was unable to process request.</faultstring></soap:Fault>",
    );
    match parse_result_envelope(&xml) {
        Err(EboekhoudenError::Transport(reason)) => {
            assert!(reason.contains("unable to process"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_parse_result_envelope_rejects_missing_body() {
    let err = parse_result_envelope("<Envelope></Envelope>").unwrap_err();
    assert!(matches!(err, EboekhoudenError::Xml(_)));
}

#[test]
fn test_document_to_value_rejects_garbage() {
    assert!(document_to_value("this is not xml").is_err());
    assert!(document_to_value("<open><unclosed></open>").is_err());
}

#[test]
fn test_document_to_value_unescapes_text() {
    let value = document_to_value("<root><name>A &amp; B</name></root>").unwrap();
    assert_eq!(value["root"]["name"], json!("A & B"));
}

#[test]
fn test_check_error_descriptor_passes_empty_descriptor() {
    let result = json!({ "GetRelatiesResult": {
        "ErrorMsg": { "LastErrorCode": "", "LastErrorDescription": "" },
        "Relaties": null
    }});
    assert!(check_error_descriptor(&result, "GetRelaties").is_ok());
}

#[test]
fn test_check_error_descriptor_passes_null_fields() {
    // Empty XML elements parse to null; they mean "no error" too.
    let result = json!({ "GetRelatiesResult": {
        "ErrorMsg": { "LastErrorCode": null, "LastErrorDescription": null }
    }});
    assert!(check_error_descriptor(&result, "GetRelaties").is_ok());
}

#[test]
fn test_check_error_descriptor_fails_on_code() {
    let result = json!({ "GetRelatiesResult": {
        "ErrorMsg": { "LastErrorCode": "EB001", "LastErrorDescription": "Invalid session" }
    }});
    match check_error_descriptor(&result, "GetRelaties") {
        Err(err @ EboekhoudenError::RemoteOperation { .. }) => {
            assert_eq!(err.remote_code(), Some("EB001"));
            assert!(err.to_string().contains("EB001"));
            assert!(err.to_string().contains("GetRelaties"));
        }
        other => panic!("expected remote operation error, got {other:?}"),
    }
}

#[test]
fn test_check_error_descriptor_unknown_fallbacks() {
    let result = json!({ "GetSaldoResult": {
        "ErrorMsg": { "LastErrorDescription": "Something failed" }
    }});
    match check_error_descriptor(&result, "GetSaldo") {
        Err(EboekhoudenError::RemoteOperation {
            code, description, ..
        }) => {
            assert_eq!(code, "UNKNOWN");
            assert_eq!(description, "Something failed");
        }
        other => panic!("expected remote operation error, got {other:?}"),
    }
}

#[test]
fn test_check_error_descriptor_ignores_payload_without_descriptor() {
    let result = json!({ "GetSaldoResult": { "Saldo": "12.50" } });
    assert!(check_error_descriptor(&result, "GetSaldo").is_ok());
}
