/// Data models for the e-Boekhouden SOAP API.
///
/// All models use serde with renames to the vendor's Dutch wire names.
/// Leaf values arrive from XML as text, so numeric and boolean fields
/// accept string-or-native representations, and empty elements decode as
/// defaults.
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Wire value coercion
// ---------------------------------------------------------------------------

pub(crate) fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        // The service reports amounts with a dot separator, but a comma
        // shows up in some localized fields.
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

pub(crate) fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deserialize an integer that may arrive as a number, a numeric string,
/// or an empty element (zero).
fn nullable_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    coerce_i64(&value).ok_or_else(|| de::Error::custom(format!("invalid integer: {value}")))
}

/// Deserialize a decimal that may arrive as a number, a numeric string,
/// or an empty element (zero).
fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    coerce_f64(&value).ok_or_else(|| de::Error::custom(format!("invalid decimal: {value}")))
}

/// Deserialize a boolean that may arrive as a bool, a "true"/"1" style
/// string, or an empty element (false).
fn nullable_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(false);
    }
    coerce_bool(&value).ok_or_else(|| de::Error::custom(format!("invalid boolean: {value}")))
}

/// Deserialize any defaultable value, mapping an empty element to the
/// default. Covers strings and the wire enums.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a date that may arrive as a date or datetime string, or as
/// an empty element (none).
fn nullable_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => {
            let date_part = s.split('T').next().unwrap_or(s.as_str());
            NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid date {s:?}: {e}")))
        }
        other => Err(de::Error::custom(format!("invalid date: {other}"))),
    }
}

/// Deserialize a `{key: [items]}` list wrapper, accepting a lone object
/// for single-element lists and an empty element for none.
fn wrapped_list<'de, D, T>(deserializer: D, key: &str) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let inner = match value.get(key) {
        Some(inner) => inner.clone(),
        None => return Ok(Vec::new()),
    };
    let items = match inner {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        single => vec![single],
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(de::Error::custom))
        .collect()
}

fn invoice_lines<'de, D>(deserializer: D) -> Result<Vec<InvoiceLine>, D::Error>
where
    D: Deserializer<'de>,
{
    wrapped_list(deserializer, "cFactuurRegels")
}

fn mutation_lines<'de, D>(deserializer: D) -> Result<Vec<MutationLine>, D::Error>
where
    D: Deserializer<'de>,
{
    wrapped_list(deserializer, "cMutatieListRegels")
}

fn wrap_new_invoice_lines<S>(lines: &[NewInvoiceLine], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("cFactuurRegel", lines)?;
    map.end()
}

fn wrap_new_mutation_lines<S>(lines: &[NewMutationLine], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("cMutatieRegel", lines)?;
    map.end()
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Login response envelope. The token lives under `OpenSessionResult` or
/// `OpenSessionSubResult` depending on the login operation; either shape
/// may be populated.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionEnvelope {
    #[serde(rename = "OpenSessionResult", default)]
    open_session: Option<SessionTokenResult>,
    #[serde(rename = "OpenSessionSubResult", default)]
    open_session_sub: Option<SessionTokenResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionTokenResult {
    #[serde(rename = "SessionID", default)]
    session_id: Option<String>,
}

impl SessionEnvelope {
    pub(crate) fn session_id(&self) -> Option<&str> {
        self.open_session
            .as_ref()
            .and_then(|r| r.session_id.as_deref())
            .or_else(|| {
                self.open_session_sub
                    .as_ref()
                    .and_then(|r| r.session_id.as_deref())
            })
            .filter(|id| !id.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Administration
// ---------------------------------------------------------------------------

/// An administration accessible to the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administration {
    #[serde(rename = "Bedrijf", default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(rename = "Plaats", default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(rename = "Guid", default, deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(rename = "StartBoekjaar", default, deserialize_with = "null_as_default")]
    pub start_fiscal_year: String,
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// A product or service article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "ArtikelID", default, deserialize_with = "nullable_i64")]
    pub id: i64,
    #[serde(
        rename = "ArtikelOmschrijving",
        default,
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    #[serde(rename = "ArtikelCode", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(
        rename = "GroepOmschrijving",
        default,
        deserialize_with = "null_as_default"
    )]
    pub group_description: String,
    #[serde(rename = "GroepCode", default, deserialize_with = "null_as_default")]
    pub group_code: String,
    #[serde(rename = "Eenheid", default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(
        rename = "InkoopprijsExclBTW",
        default,
        deserialize_with = "nullable_f64"
    )]
    pub purchase_price_excl_vat: f64,
    #[serde(
        rename = "VerkoopprijsExclBTW",
        default,
        deserialize_with = "nullable_f64"
    )]
    pub sales_price_excl_vat: f64,
    #[serde(
        rename = "VerkoopprijsInclBTW",
        default,
        deserialize_with = "nullable_f64"
    )]
    pub sales_price_incl_vat: f64,
    #[serde(rename = "BTWCode", default, deserialize_with = "null_as_default")]
    pub vat_code: String,
    #[serde(
        rename = "TegenrekeningCode",
        default,
        deserialize_with = "null_as_default"
    )]
    pub contra_account_code: String,
    #[serde(rename = "BtwPercentage", default, deserialize_with = "nullable_f64")]
    pub vat_percentage: f64,
    #[serde(rename = "KostenplaatsID", default, deserialize_with = "nullable_i64")]
    pub cost_center_id: i64,
    #[serde(rename = "Actief", default, deserialize_with = "nullable_bool")]
    pub active: bool,
}

/// Filter options for listing articles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleFilter {
    #[serde(rename = "ArtikelID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        rename = "ArtikelOmschrijving",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "ArtikelCode", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(
        rename = "GroepOmschrijving",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_description: Option<String>,
    #[serde(rename = "GroepCode", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Invoice
// ---------------------------------------------------------------------------

/// VAT codes used on invoice and mutation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VatCode {
    /// BTW hoog, verkopen.
    #[serde(rename = "HOOG_VERK")]
    HighSales,
    /// BTW hoog, verkopen 21%.
    #[serde(rename = "HOOG_VERK_21")]
    HighSales21,
    /// BTW laag, verkopen.
    #[serde(rename = "LAAG_VERK")]
    LowSales,
    /// BTW laag, verkopen 9%.
    #[serde(rename = "LAAG_VERK_9")]
    LowSales9,
    /// BTW verlegd 9% (1e op de btw-aangifte).
    #[serde(rename = "VERL_VERK_L9")]
    ReverseChargedSalesLow9,
    /// BTW verlegd 21% (1e op de btw-aangifte).
    #[serde(rename = "VERL_VERK")]
    ReverseChargedSales,
    /// Afwijkend btw-tarief.
    #[serde(rename = "AFW")]
    Deviating,
    /// Leveringen naar buiten de EU 0%.
    #[serde(rename = "BU_EU_VERK")]
    OutsideEuSales,
    /// Goederen naar binnen de EU 0%.
    #[serde(rename = "BI_EU_VERK")]
    IntraEuSales,
    /// Diensten naar binnen de EU 0%.
    #[serde(rename = "BI_EU_VERK_D")]
    IntraEuServices,
    /// Afstandsverkopen naar binnen de EU 0%.
    #[serde(rename = "AFST_VERK")]
    IntraEuDistanceSales,
    /// BTW laag, inkopen.
    #[serde(rename = "LAAG_INK")]
    LowPurchase,
    /// BTW laag, inkopen 9%.
    #[serde(rename = "LAAG_INK_9")]
    LowPurchase9,
    /// BTW verlegd, laag, inkopen.
    #[serde(rename = "VERL_INK_L9")]
    ReverseChargedPurchaseLow9,
    /// BTW hoog, inkopen.
    #[serde(rename = "HOOG_INK")]
    HighPurchase,
    /// BTW hoog, inkopen 21%.
    #[serde(rename = "HOOG_INK_21")]
    HighPurchase21,
    /// BTW verlegd, hoog, inkopen.
    #[serde(rename = "VERL_INK")]
    ReverseChargedPurchase,
    /// Afwijkend btw-tarief verkoop.
    #[serde(rename = "AFW_VERK")]
    DeviatingSales,
    /// Leveringen/diensten van buiten de EU 0%.
    #[serde(rename = "BU_EU_INK")]
    OutsideEuPurchase,
    /// Leveringen/diensten van binnen de EU 0%.
    #[serde(rename = "BI_EU_INK")]
    IntraEuPurchase,
    /// Geen BTW.
    #[default]
    #[serde(rename = "GEEN")]
    None,
}

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    #[serde(rename = "Aantal", default, deserialize_with = "nullable_f64")]
    pub quantity: f64,
    #[serde(rename = "Eenheid", default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(rename = "Code", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "Omschrijving", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "PrijsPerEenheid", default, deserialize_with = "nullable_f64")]
    pub price_per_unit: f64,
    #[serde(rename = "BTWCode", default, deserialize_with = "null_as_default")]
    pub vat_code: VatCode,
    #[serde(
        rename = "TegenrekeningCode",
        default,
        deserialize_with = "null_as_default"
    )]
    pub contra_account_code: String,
    #[serde(rename = "KostenplaatsID", default, deserialize_with = "nullable_i64")]
    pub cost_center_id: i64,
}

/// An invoice with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "Factuurnummer", default, deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(rename = "RelatieCode", default, deserialize_with = "null_as_default")]
    pub relation_code: String,
    #[serde(rename = "Datum", default, deserialize_with = "nullable_date")]
    pub date: Option<NaiveDate>,
    #[serde(
        rename = "Betalingstermijn",
        default,
        deserialize_with = "nullable_i64"
    )]
    pub payment_term: i64,
    #[serde(rename = "TotaalExclBTW", default, deserialize_with = "nullable_f64")]
    pub total_excl_vat: f64,
    #[serde(rename = "TotaalBTW", default, deserialize_with = "nullable_f64")]
    pub total_vat: f64,
    #[serde(rename = "TotaalInclBTW", default, deserialize_with = "nullable_f64")]
    pub total_incl_vat: f64,
    #[serde(
        rename = "TotaalOpenstaand",
        default,
        deserialize_with = "nullable_f64"
    )]
    pub total_outstanding: f64,
    #[serde(rename = "URLPDFBestand", default, deserialize_with = "null_as_default")]
    pub pdf_url: String,
    #[serde(rename = "Regels", default, deserialize_with = "invoice_lines")]
    pub lines: Vec<InvoiceLine>,
}

/// Filter options for listing invoices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceFilter {
    #[serde(rename = "Factuurnummer", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "Relatiecode", skip_serializing_if = "Option::is_none")]
    pub relation_code: Option<String>,
    #[serde(rename = "DatumVan", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "DatumTm", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

/// One line of an invoice to be created.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewInvoiceLine {
    #[serde(rename = "Aantal", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(rename = "Eenheid", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Omschrijving")]
    pub description: String,
    #[serde(rename = "PrijsPerEenheid", skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(rename = "BTWCode")]
    pub vat_code: VatCode,
    #[serde(rename = "TegenrekeningCode")]
    pub contra_account_code: String,
    #[serde(rename = "KostenplaatsID", skip_serializing_if = "Option::is_none")]
    pub cost_center_id: Option<i64>,
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoice {
    #[serde(rename = "RelatieCode")]
    pub relation_code: String,
    #[serde(rename = "Datum")]
    pub date: NaiveDate,
    /// Name of the invoice template to render with.
    #[serde(rename = "Factuursjabloon")]
    pub template: String,
    #[serde(rename = "Betalingstermijn", skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<i64>,
    #[serde(rename = "Regels", serialize_with = "wrap_new_invoice_lines")]
    pub lines: Vec<NewInvoiceLine>,
}

// ---------------------------------------------------------------------------
// Ledger account
// ---------------------------------------------------------------------------

/// Balance categories of ledger accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BalanceCategory {
    /// BTW af te dragen hoog.
    #[serde(rename = "AF19")]
    VatToPayHigh,
    /// BTW af te dragen laag.
    #[serde(rename = "AF6")]
    VatToPayLow,
    /// BTW af te dragen overig.
    #[serde(rename = "AFOVERIG")]
    VatToPayOther,
    /// Overige balansrekeningen.
    #[default]
    #[serde(rename = "BAL")]
    Balance,
    /// BTW rekening-courant.
    #[serde(rename = "BTWRC")]
    VatCurrentAccount,
    /// Crediteurenrekeningen.
    #[serde(rename = "CRED")]
    Creditors,
    /// Debiteurenrekeningen.
    #[serde(rename = "DEB")]
    Debtors,
    /// Financiële rekeningen (kas, bank, etc.).
    #[serde(rename = "FIN")]
    Financial,
    /// Voorbelasting.
    #[serde(rename = "VOOR")]
    InputVat,
    /// Verlies- en winstrekening.
    #[serde(rename = "VW")]
    ProfitAndLoss,
}

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerAccount {
    #[serde(rename = "ID", default, deserialize_with = "nullable_i64")]
    pub id: i64,
    #[serde(rename = "Code", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "Omschrijving", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Categorie", default, deserialize_with = "null_as_default")]
    pub category: BalanceCategory,
    /// Reserved by the service, not in use.
    #[serde(rename = "Groep", default, deserialize_with = "null_as_default")]
    pub group: String,
}

/// Filter options for listing ledger accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerAccountFilter {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Categorie", skip_serializing_if = "Option::is_none")]
    pub category: Option<BalanceCategory>,
}

/// The category choices accepted when creating or updating a ledger
/// account: balance, or profit & loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerAccountKind {
    #[serde(rename = "BAL")]
    Balance,
    #[serde(rename = "VW")]
    ProfitAndLoss,
}

/// Payload for creating a ledger account. The code has to be unique
/// within the administration.
#[derive(Debug, Clone, Serialize)]
pub struct NewLedgerAccount {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Omschrijving")]
    pub description: String,
    #[serde(rename = "Categorie")]
    pub category: LedgerAccountKind,
}

/// Payload for updating a ledger account.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerAccountUpdate {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Omschrijving")]
    pub description: String,
    #[serde(rename = "Categorie")]
    pub category: LedgerAccountKind,
}

// ---------------------------------------------------------------------------
// Cost center
// ---------------------------------------------------------------------------

/// A cost center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenter {
    #[serde(rename = "KostenplaatsId", default, deserialize_with = "nullable_i64")]
    pub id: i64,
    #[serde(rename = "Omschrijving", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        rename = "KostenplaatsParentId",
        default,
        deserialize_with = "nullable_i64"
    )]
    pub parent_id: i64,
}

/// Filter options for listing cost centers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostCenterFilter {
    #[serde(rename = "KostenplaatsID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        rename = "KostenplaatsParentID",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<i64>,
    #[serde(rename = "Omschrijving", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// The kind of a mutation (journal entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MutationKind {
    #[serde(rename = "OpeningsSaldo")]
    OpeningBalance,
    #[serde(rename = "FactuurOntvangen")]
    InvoiceReceived,
    #[serde(rename = "FactuurVerstuurd")]
    InvoiceSent,
    #[serde(rename = "FactuurbetalingOntvangen")]
    InvoicePaymentReceived,
    #[serde(rename = "FactuurbetalingVerstuurd")]
    InvoicePaymentSent,
    #[serde(rename = "GeldOntvangen")]
    MoneyReceived,
    #[serde(rename = "GeldUitgegeven")]
    MoneySpent,
    #[default]
    #[serde(rename = "Memoriaal")]
    GeneralJournal,
}

/// One line of a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationLine {
    #[serde(rename = "BedragInvoer", default, deserialize_with = "nullable_f64")]
    pub amount_entered: f64,
    #[serde(rename = "BedragExclBTW", default, deserialize_with = "nullable_f64")]
    pub amount_excl_vat: f64,
    #[serde(rename = "BedragBTW", default, deserialize_with = "nullable_f64")]
    pub amount_vat: f64,
    #[serde(rename = "BedragInclBTW", default, deserialize_with = "nullable_f64")]
    pub amount_incl_vat: f64,
    #[serde(rename = "BTWCode", default, deserialize_with = "null_as_default")]
    pub vat_code: String,
    #[serde(rename = "BTWPercentage", default, deserialize_with = "nullable_f64")]
    pub vat_percentage: f64,
    #[serde(rename = "Factuurnummer", default, deserialize_with = "null_as_default")]
    pub invoice_number: String,
    #[serde(
        rename = "TegenrekeningCode",
        default,
        deserialize_with = "null_as_default"
    )]
    pub contra_account_code: String,
    #[serde(rename = "KostenplaatsID", default, deserialize_with = "nullable_i64")]
    pub cost_center_id: i64,
}

/// A mutation (journal entry) with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    #[serde(rename = "MutatieNr", default, deserialize_with = "nullable_i64")]
    pub number: i64,
    #[serde(rename = "Soort", default, deserialize_with = "null_as_default")]
    pub kind: MutationKind,
    #[serde(rename = "Datum", default, deserialize_with = "nullable_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Rekening", default, deserialize_with = "null_as_default")]
    pub account: String,
    #[serde(rename = "RelatieCode", default, deserialize_with = "null_as_default")]
    pub relation_code: String,
    #[serde(rename = "Factuurnummer", default, deserialize_with = "null_as_default")]
    pub invoice_number: String,
    #[serde(rename = "Boekstuk", default, deserialize_with = "null_as_default")]
    pub voucher: String,
    #[serde(rename = "Omschrijving", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        rename = "Betalingstermijn",
        default,
        deserialize_with = "null_as_default"
    )]
    pub payment_term: String,
    #[serde(rename = "InExBTW", default, deserialize_with = "null_as_default")]
    pub in_ex_vat: String,
    #[serde(
        rename = "MutatieRegels",
        default,
        deserialize_with = "mutation_lines"
    )]
    pub lines: Vec<MutationLine>,
}

/// Filter options for listing mutations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MutationFilter {
    #[serde(rename = "MutatieNr", skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(rename = "MutatieNrVan", skip_serializing_if = "Option::is_none")]
    pub number_from: Option<i64>,
    #[serde(rename = "MutatieNrTm", skip_serializing_if = "Option::is_none")]
    pub number_to: Option<i64>,
    #[serde(rename = "Factuurnummer", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(rename = "DatumVan", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "DatumTm", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

/// One line of a mutation to be created.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewMutationLine {
    #[serde(rename = "BedragInvoer")]
    pub amount_entered: f64,
    #[serde(rename = "BedragExclBTW")]
    pub amount_excl_vat: f64,
    #[serde(rename = "BedragBTW")]
    pub amount_vat: f64,
    #[serde(rename = "BedragInclBTW", skip_serializing_if = "Option::is_none")]
    pub amount_incl_vat: Option<f64>,
    #[serde(rename = "BTWCode", skip_serializing_if = "Option::is_none")]
    pub vat_code: Option<String>,
    #[serde(rename = "BTWPercentage", skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<f64>,
    #[serde(rename = "Factuurnummer")]
    pub invoice_number: String,
    #[serde(rename = "TegenrekeningCode")]
    pub contra_account_code: String,
    #[serde(rename = "KostenplaatsID", skip_serializing_if = "Option::is_none")]
    pub cost_center_id: Option<i64>,
}

/// Payload for creating a mutation.
#[derive(Debug, Clone, Serialize)]
pub struct NewMutation {
    #[serde(rename = "Soort")]
    pub kind: MutationKind,
    #[serde(rename = "Datum")]
    pub date: NaiveDate,
    #[serde(rename = "Rekening")]
    pub account: String,
    #[serde(rename = "RelatieCode")]
    pub relation_code: String,
    #[serde(rename = "Factuurnummer")]
    pub invoice_number: String,
    #[serde(rename = "Omschrijving")]
    pub description: String,
    #[serde(rename = "Betalingstermijn")]
    pub payment_term: String,
    #[serde(rename = "InExBTW", skip_serializing_if = "Option::is_none")]
    pub in_ex_vat: Option<String>,
    #[serde(rename = "MutatieRegels", serialize_with = "wrap_new_mutation_lines")]
    pub lines: Vec<NewMutationLine>,
}

// ---------------------------------------------------------------------------
// Open items
// ---------------------------------------------------------------------------

/// Which side of the open items to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenItemKind {
    #[serde(rename = "Debiteuren")]
    Debtors,
    #[serde(rename = "Crediteuren")]
    Creditors,
}

/// An outstanding invoice amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenItem {
    #[serde(rename = "MutDatum", default, deserialize_with = "nullable_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "MutFactuur", default, deserialize_with = "null_as_default")]
    pub invoice_number: String,
    #[serde(rename = "RelCode", default, deserialize_with = "null_as_default")]
    pub relation_code: String,
    #[serde(rename = "RelBedrijf", default, deserialize_with = "null_as_default")]
    pub relation_company: String,
    #[serde(rename = "Bedrag", default, deserialize_with = "nullable_f64")]
    pub amount: f64,
    #[serde(rename = "Voldaan", default, deserialize_with = "nullable_f64")]
    pub paid: f64,
    #[serde(rename = "Openstaand", default, deserialize_with = "nullable_f64")]
    pub outstanding: f64,
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// Gender of a private relation's contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "v")]
    Female,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

/// Whether a relation is a private person or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RelationType {
    #[default]
    #[serde(rename = "P")]
    Private,
    #[serde(rename = "B")]
    Business,
}

/// Standard relation, or member of the members administration module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RelationStatus {
    #[default]
    #[serde(rename = "0")]
    Standard,
    #[serde(rename = "1")]
    MemberAdministration,
}

/// A relation (customer or supplier).
///
/// For a private person the name lives in `company` and `contact` is not
/// used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "ID", default, deserialize_with = "nullable_i64")]
    pub id: i64,
    #[serde(rename = "AddDatum", default, deserialize_with = "nullable_date")]
    pub added: Option<NaiveDate>,
    /// Unique code of the relation within the administration.
    #[serde(rename = "Code", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "Bedrijf", default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(
        rename = "Contactpersoon",
        default,
        deserialize_with = "null_as_default"
    )]
    pub contact: String,
    #[serde(rename = "Geslacht", default, deserialize_with = "null_as_default")]
    pub gender: Gender,
    #[serde(rename = "Adres", default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "Postcode", default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(rename = "Plaats", default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(rename = "Land", default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(rename = "Adres2", default, deserialize_with = "null_as_default")]
    pub mailing_address: String,
    #[serde(rename = "Postcode2", default, deserialize_with = "null_as_default")]
    pub mailing_postal_code: String,
    #[serde(rename = "Plaats2", default, deserialize_with = "null_as_default")]
    pub mailing_city: String,
    #[serde(rename = "Land2", default, deserialize_with = "null_as_default")]
    pub mailing_country: String,
    #[serde(rename = "Telefoon", default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(rename = "GSM", default, deserialize_with = "null_as_default")]
    pub mobile: String,
    #[serde(rename = "FAX", default, deserialize_with = "null_as_default")]
    pub fax: String,
    #[serde(rename = "Email", default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "Site", default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(rename = "Notitie", default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// Superseded by `iban`.
    #[serde(rename = "Bankrekening", default, deserialize_with = "null_as_default")]
    pub bank_account: String,
    /// Superseded by `iban`.
    #[serde(rename = "Girorekening", default, deserialize_with = "null_as_default")]
    pub giro_account: String,
    #[serde(rename = "BTWNummer", default, deserialize_with = "null_as_default")]
    pub vat_number: String,
    #[serde(rename = "KvkNummer", default, deserialize_with = "null_as_default")]
    pub chamber_of_commerce_number: String,
    #[serde(rename = "Aanhef", default, deserialize_with = "null_as_default")]
    pub salutation: String,
    #[serde(rename = "IBAN", default, deserialize_with = "null_as_default")]
    pub iban: String,
    #[serde(rename = "BIC", default, deserialize_with = "null_as_default")]
    pub bic: String,
    #[serde(rename = "BP", default, deserialize_with = "null_as_default")]
    pub kind: RelationType,
    #[serde(rename = "Def1", default, deserialize_with = "null_as_default")]
    pub custom1: String,
    #[serde(rename = "Def2", default, deserialize_with = "null_as_default")]
    pub custom2: String,
    #[serde(rename = "Def3", default, deserialize_with = "null_as_default")]
    pub custom3: String,
    #[serde(rename = "Def4", default, deserialize_with = "null_as_default")]
    pub custom4: String,
    #[serde(rename = "Def5", default, deserialize_with = "null_as_default")]
    pub custom5: String,
    #[serde(rename = "Def6", default, deserialize_with = "null_as_default")]
    pub custom6: String,
    #[serde(rename = "Def7", default, deserialize_with = "null_as_default")]
    pub custom7: String,
    #[serde(rename = "Def8", default, deserialize_with = "null_as_default")]
    pub custom8: String,
    #[serde(rename = "Def9", default, deserialize_with = "null_as_default")]
    pub custom9: String,
    #[serde(rename = "Def10", default, deserialize_with = "null_as_default")]
    pub custom10: String,
    #[serde(rename = "LA", default, deserialize_with = "null_as_default")]
    pub status: RelationStatus,
    #[serde(rename = "Gb_ID", default, deserialize_with = "nullable_i64")]
    pub ledger_account_id: i64,
    #[serde(rename = "GeenEmail", default, deserialize_with = "nullable_i64")]
    pub no_email: i64,
    /// Reserved by the service, cannot be used through the API.
    #[serde(
        rename = "NieuwsbriefgroepenCount",
        default,
        deserialize_with = "nullable_i64"
    )]
    pub newsletter_group_count: i64,
}

/// Filter options for listing relations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationFilter {
    #[serde(rename = "Trefwoord", skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Payload for creating a relation. Code and company name are mandatory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRelation {
    #[serde(rename = "BP")]
    pub kind: RelationType,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Bedrijf")]
    pub company: String,
    #[serde(rename = "Contactpersoon", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "Geslacht", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(rename = "Adres", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Postcode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "Plaats", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "Land", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "Telefoon", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "GSM", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Site", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "Notitie", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "BTWNummer", skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(rename = "KvkNummer", skip_serializing_if = "Option::is_none")]
    pub chamber_of_commerce_number: Option<String>,
    #[serde(rename = "Aanhef", skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(rename = "IBAN", skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(rename = "BIC", skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(rename = "LA", skip_serializing_if = "Option::is_none")]
    pub status: Option<RelationStatus>,
    #[serde(rename = "Gb_ID", skip_serializing_if = "Option::is_none")]
    pub ledger_account_id: Option<i64>,
    #[serde(rename = "GeenEmail", skip_serializing_if = "Option::is_none")]
    pub no_email: Option<i64>,
}

/// Payload for updating a relation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationUpdate {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "BP")]
    pub kind: RelationType,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Bedrijf")]
    pub company: String,
    #[serde(rename = "Contactpersoon", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "Geslacht", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(rename = "Adres", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Postcode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "Plaats", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "Land", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "Telefoon", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "GSM", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Site", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "Notitie", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "BTWNummer", skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(rename = "KvkNummer", skip_serializing_if = "Option::is_none")]
    pub chamber_of_commerce_number: Option<String>,
    #[serde(rename = "Aanhef", skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(rename = "IBAN", skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(rename = "BIC", skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(rename = "LA", skip_serializing_if = "Option::is_none")]
    pub status: Option<RelationStatus>,
    #[serde(rename = "Gb_ID", skip_serializing_if = "Option::is_none")]
    pub ledger_account_id: Option<i64>,
    #[serde(rename = "GeenEmail", skip_serializing_if = "Option::is_none")]
    pub no_email: Option<i64>,
}

// ---------------------------------------------------------------------------
// Balance
// ---------------------------------------------------------------------------

/// The balance of a single ledger account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(rename = "ID", default, deserialize_with = "nullable_i64")]
    pub id: i64,
    #[serde(rename = "Code", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "Categorie", default, deserialize_with = "null_as_default")]
    pub category: BalanceCategory,
    #[serde(rename = "Saldo", default, deserialize_with = "nullable_f64")]
    pub balance: f64,
}

/// Filter options for listing balances.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalancesFilter {
    #[serde(rename = "KostenPlaatsId")]
    pub cost_center_id: i64,
    #[serde(rename = "DatumVan", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "DatumTot", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(rename = "Categorie", skip_serializing_if = "Option::is_none")]
    pub category: Option<BalanceCategory>,
}

/// Filter selecting the single balance to fetch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceFilter {
    #[serde(rename = "GbCode")]
    pub ledger_account_code: String,
    #[serde(rename = "KostenPlaatsId")]
    pub cost_center_id: i64,
    #[serde(rename = "DatumVan", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "DatumTot", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}
