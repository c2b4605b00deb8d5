/// Unit tests for model decoding and encoding.
///
/// Exercises the wire-tolerant deserializers: string-or-number leaves,
/// empty-element defaults, date-or-datetime dates, and the nested list
/// wrappers, plus the serialized shapes of filters and payloads.
use chrono::NaiveDate;
use serde_json::json;

use eboekhouden_sdk::*;

#[test]
fn test_relation_decodes_text_leaves() {
    let relation: Relation = serde_json::from_value(json!({
        "ID": "42",
        "AddDatum": "2020-01-15T00:00:00",
        "Code": "REL42",
        "Bedrijf": "Van der Berg BV",
        "Geslacht": "m",
        "BP": "B",
        "LA": "1",
        "Gb_ID": "1300"
    }))
    .unwrap();
    assert_eq!(relation.id, 42);
    assert_eq!(relation.added, NaiveDate::from_ymd_opt(2020, 1, 15));
    assert_eq!(relation.code, "REL42");
    assert_eq!(relation.company, "Van der Berg BV");
    assert_eq!(relation.gender, Gender::Male);
    assert_eq!(relation.kind, RelationType::Business);
    assert_eq!(relation.status, RelationStatus::MemberAdministration);
    assert_eq!(relation.ledger_account_id, 1300);
    // Absent fields fall back to defaults.
    assert_eq!(relation.email, "");
    assert_eq!(relation.no_email, 0);
}

#[test]
fn test_relation_tolerates_empty_elements() {
    // Empty XML elements arrive as nulls.
    let relation: Relation = serde_json::from_value(json!({
        "ID": null,
        "AddDatum": null,
        "Code": "X",
        "Bedrijf": null,
        "Geslacht": null,
        "GSM": null
    }))
    .unwrap();
    assert_eq!(relation.id, 0);
    assert_eq!(relation.added, None);
    assert_eq!(relation.company, "");
    assert_eq!(relation.gender, Gender::Unknown);
    assert_eq!(relation.mobile, "");
}

#[test]
fn test_article_decodes_amounts_and_booleans() {
    let article: Article = serde_json::from_value(json!({
        "ArtikelID": "7",
        "ArtikelCode": "ART7",
        "InkoopprijsExclBTW": "10.50",
        "VerkoopprijsInclBTW": 12.71,
        "BtwPercentage": "21",
        "Actief": "true"
    }))
    .unwrap();
    assert_eq!(article.id, 7);
    assert_eq!(article.purchase_price_excl_vat, 10.50);
    assert_eq!(article.sales_price_incl_vat, 12.71);
    assert_eq!(article.vat_percentage, 21.0);
    assert!(article.active);
}

#[test]
fn test_invoice_unwraps_nested_lines() {
    let invoice: Invoice = serde_json::from_value(json!({
        "Factuurnummer": "F2024-001",
        "Datum": "2024-03-01",
        "TotaalInclBTW": "121.00",
        "Regels": { "cFactuurRegels": [
            { "Aantal": "2", "Code": "A", "BTWCode": "HOOG_VERK_21" },
            { "Aantal": "1", "Code": "B", "BTWCode": "GEEN" }
        ]}
    }))
    .unwrap();
    assert_eq!(invoice.number, "F2024-001");
    assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(invoice.lines.len(), 2);
    assert_eq!(invoice.lines[0].vat_code, VatCode::HighSales21);
    assert_eq!(invoice.lines[1].quantity, 1.0);
}

#[test]
fn test_invoice_single_line_arrives_as_lone_object() {
    let invoice: Invoice = serde_json::from_value(json!({
        "Factuurnummer": "F1",
        "Regels": { "cFactuurRegels": { "Aantal": "3", "Code": "C" } }
    }))
    .unwrap();
    assert_eq!(invoice.lines.len(), 1);
    assert_eq!(invoice.lines[0].quantity, 3.0);
}

#[test]
fn test_invoice_null_lines_decode_empty() {
    let invoice: Invoice = serde_json::from_value(json!({
        "Factuurnummer": "F1",
        "Regels": null
    }))
    .unwrap();
    assert!(invoice.lines.is_empty());
}

#[test]
fn test_mutation_decodes_kind_and_lines() {
    let mutation: Mutation = serde_json::from_value(json!({
        "MutatieNr": "1001",
        "Soort": "FactuurVerstuurd",
        "Datum": "2024-02-10T00:00:00",
        "Rekening": "1300",
        "MutatieRegels": { "cMutatieListRegels": {
            "BedragExclBTW": "100.00",
            "BedragBTW": "21.00",
            "TegenrekeningCode": "8000"
        }}
    }))
    .unwrap();
    assert_eq!(mutation.number, 1001);
    assert_eq!(mutation.kind, MutationKind::InvoiceSent);
    assert_eq!(mutation.date, NaiveDate::from_ymd_opt(2024, 2, 10));
    assert_eq!(mutation.lines.len(), 1);
    assert_eq!(mutation.lines[0].amount_vat, 21.0);
}

#[test]
fn test_balance_decodes_category() {
    let balance: Balance = serde_json::from_value(json!({
        "ID": "5",
        "Code": "8000",
        "Categorie": "VW",
        "Saldo": "-250.75"
    }))
    .unwrap();
    assert_eq!(balance.category, BalanceCategory::ProfitAndLoss);
    assert_eq!(balance.balance, -250.75);
}

#[test]
fn test_open_item_decodes() {
    let item: OpenItem = serde_json::from_value(json!({
        "MutDatum": "2024-01-31",
        "MutFactuur": "F2024-002",
        "RelCode": "DEB01",
        "RelBedrijf": "Jansen",
        "Bedrag": "100",
        "Voldaan": "40",
        "Openstaand": "60"
    }))
    .unwrap();
    assert_eq!(item.outstanding, 60.0);
    assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 1, 31));
}

#[test]
fn test_administration_decodes() {
    let administration: Administration = serde_json::from_value(json!({
        "Bedrijf": "Demo BV",
        "Plaats": "Amsterdam",
        "Guid": "{123e4567-e89b-12d3-a456-426614174000}",
        "StartBoekjaar": "2019"
    }))
    .unwrap();
    assert_eq!(administration.company, "Demo BV");
    assert_eq!(administration.start_fiscal_year, "2019");
}

#[test]
fn test_relation_filter_serializes_only_set_fields() {
    let filter = RelationFilter {
        code: Some("REL1".into()),
        ..Default::default()
    };
    let value = serde_json::to_value(filter).unwrap();
    assert_eq!(value, json!({ "Code": "REL1" }));
}

#[test]
fn test_mutation_filter_serializes_wire_names() {
    let filter = MutationFilter {
        number_from: Some(10),
        number_to: Some(20),
        date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Default::default()
    };
    let value = serde_json::to_value(filter).unwrap();
    assert_eq!(
        value,
        json!({ "MutatieNrVan": 10, "MutatieNrTm": 20, "DatumVan": "2024-01-01" })
    );
}

#[test]
fn test_balances_filter_keeps_required_cost_center() {
    let filter = BalancesFilter {
        cost_center_id: 0,
        category: Some(BalanceCategory::Debtors),
        ..Default::default()
    };
    let value = serde_json::to_value(filter).unwrap();
    assert_eq!(value, json!({ "KostenPlaatsId": 0, "Categorie": "DEB" }));
}

#[test]
fn test_new_ledger_account_serializes_category_code() {
    let account = NewLedgerAccount {
        code: "4010".into(),
        description: "Kantoorkosten".into(),
        category: LedgerAccountKind::ProfitAndLoss,
    };
    let value = serde_json::to_value(account).unwrap();
    assert_eq!(
        value,
        json!({ "Code": "4010", "Omschrijving": "Kantoorkosten", "Categorie": "VW" })
    );
}

#[test]
fn test_new_invoice_wraps_lines() {
    let invoice = NewInvoice {
        relation_code: "DEB01".into(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        template: "Standaard".into(),
        payment_term: Some(14),
        lines: vec![NewInvoiceLine {
            quantity: Some(2.0),
            code: "A".into(),
            description: "Uren".into(),
            vat_code: VatCode::HighSales21,
            contra_account_code: "8000".into(),
            ..Default::default()
        }],
    };
    let value = serde_json::to_value(invoice).unwrap();
    assert_eq!(value["Regels"]["cFactuurRegel"][0]["BTWCode"], json!("HOOG_VERK_21"));
    assert_eq!(value["Datum"], json!("2024-05-01"));
    assert_eq!(value["Betalingstermijn"], json!(14));
}

#[test]
fn test_new_mutation_wraps_lines() {
    let mutation = NewMutation {
        kind: MutationKind::MoneyReceived,
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        account: "1010".into(),
        relation_code: "DEB01".into(),
        invoice_number: "F2024-001".into(),
        description: "Betaling".into(),
        payment_term: "14".into(),
        in_ex_vat: None,
        lines: vec![NewMutationLine {
            amount_entered: 121.0,
            amount_excl_vat: 100.0,
            amount_vat: 21.0,
            invoice_number: "F2024-001".into(),
            contra_account_code: "1300".into(),
            ..Default::default()
        }],
    };
    let value = serde_json::to_value(mutation).unwrap();
    assert_eq!(value["Soort"], json!("GeldOntvangen"));
    assert_eq!(
        value["MutatieRegels"]["cMutatieRegel"][0]["BedragInvoer"],
        json!(121.0)
    );
    // Unset optionals stay off the wire.
    assert!(value.get("InExBTW").is_none());
}

#[test]
fn test_open_item_kind_serializes_wire_names() {
    assert_eq!(
        serde_json::to_value(OpenItemKind::Debtors).unwrap(),
        json!("Debiteuren")
    );
    assert_eq!(
        serde_json::to_value(OpenItemKind::Creditors).unwrap(),
        json!("Crediteuren")
    );
}
