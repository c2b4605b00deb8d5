/// High-level e-Boekhouden client.
///
/// This is the primary entry point for SDK users. It owns the lazily
/// created transport handle and the cached session token, wraps every
/// remote invocation with a bounded linear retry policy and the uniform
/// error-detection rule, and exposes the domain operations as thin typed
/// pass-throughs.
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde_json::{json, Map, Value};
use tokio::sync::{Mutex, OnceCell};

use crate::config::ClientOptions;
use crate::errors::EboekhoudenError;
use crate::models::*;
use crate::soap::{check_error_descriptor, SoapAction};
use crate::transport::{HttpTransport, Transport};

/// Fixed delay between retry attempts.
const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Source marker stamped on login calls.
const SOURCE: &str = "Rust_SDK";

/// Which login operation this client uses, resolved once at construction
/// from the presence of an administration GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginKind {
    Primary,
    SubAccount,
}

/// The e-Boekhouden client.
///
/// Cheap to clone; clones share the transport handle and the session, so
/// a host application can hand a clone to its shutdown path and call
/// [`close_session`](EboekhoudenClient::close_session) there.
#[derive(Clone)]
pub struct EboekhoudenClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    options: ClientOptions,
    login_kind: LoginKind,
    transport: OnceCell<Arc<dyn Transport>>,
    session_id: Mutex<Option<String>>,
}

impl EboekhoudenClient {
    /// Create a new client. The HTTP transport is created on first use.
    pub fn new(options: ClientOptions) -> Self {
        Self::build(options, OnceCell::new())
    }

    /// Create a client over a caller-supplied transport, bypassing HTTP.
    /// This is the seam mock transports plug into.
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Self {
        Self::build(options, OnceCell::new_with(Some(transport)))
    }

    fn build(options: ClientOptions, transport: OnceCell<Arc<dyn Transport>>) -> Self {
        let login_kind = if options.credentials.administration_guid.is_some() {
            LoginKind::SubAccount
        } else {
            LoginKind::Primary
        };
        Self {
            inner: Arc::new(ClientInner {
                options,
                login_kind,
                transport,
                session_id: Mutex::new(None),
            }),
        }
    }

    /// The options this client was constructed with.
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// Get the shared transport handle, creating it on first use.
    async fn transport(&self) -> Result<Arc<dyn Transport>, EboekhoudenError> {
        let transport = self
            .inner
            .transport
            .get_or_try_init(|| async {
                let transport = HttpTransport::new(&self.inner.options)?;
                Ok::<_, EboekhoudenError>(Arc::new(transport) as Arc<dyn Transport>)
            })
            .await?;
        Ok(transport.clone())
    }

    // -----------------------------------------------------------------------
    // Session Management
    // -----------------------------------------------------------------------

    /// Eagerly acquire a session.
    ///
    /// Optional: every authenticated operation acquires a session on
    /// demand. Calling this at startup surfaces credential problems
    /// early.
    pub async fn init(&self) -> Result<(), EboekhoudenError> {
        self.session_id().await.map(|_| ())
    }

    /// The current session token, logging in first if none is cached.
    ///
    /// The cache is guarded by a mutex held across the login call, so
    /// concurrent first calls perform exactly one login.
    pub async fn session_id(&self) -> Result<String, EboekhoudenError> {
        let mut cached = self.inner.session_id.lock().await;
        if let Some(session_id) = cached.as_ref() {
            return Ok(session_id.clone());
        }
        let session_id = self.login().await?;
        *cached = Some(session_id.clone());
        Ok(session_id)
    }

    async fn login(&self) -> Result<String, EboekhoudenError> {
        let action = match self.inner.login_kind {
            LoginKind::Primary => SoapAction::OpenSession,
            LoginKind::SubAccount => SoapAction::OpenSessionSub,
        };
        debug!("client.login action={action}");

        let credentials = &self.inner.options.credentials;
        let mut params = Map::new();
        params.insert("Username".into(), json!(credentials.username));
        params.insert(
            "SecurityCode1".into(),
            json!(credentials.security_code_1),
        );
        params.insert(
            "SecurityCode2".into(),
            json!(credentials.security_code_2),
        );
        params.insert("Source".into(), json!(SOURCE));
        if let Some(guid) = &credentials.administration_guid {
            params.insert("AdministratieGUID".into(), json!(guid));
        }

        let result = self
            .invoke(action, Value::Object(params), self.inner.options.retries)
            .await?;
        let envelope: SessionEnvelope = decode(&result)?;
        envelope
            .session_id()
            .map(str::to_string)
            .ok_or_else(|| {
                EboekhoudenError::Authentication("no session ID returned".into())
            })
    }

    /// Close the current session, best-effort.
    ///
    /// A no-op when no session is cached. Logout failures are logged and
    /// swallowed; the cached token is cleared regardless.
    pub async fn close_session(&self) {
        let mut cached = self.inner.session_id.lock().await;
        let Some(session_id) = cached.take() else {
            return;
        };
        debug!("client.close_session");
        let params = json!({ "SessionID": session_id });
        match self
            .invoke(SoapAction::CloseSession, params, self.inner.options.retries)
            .await
        {
            // The close response carries no payload.
            Ok(_) | Err(EboekhoudenError::MissingResult { .. }) => {}
            Err(err) => warn!("client.close_session logout failed: {err}"),
        }
    }

    // -----------------------------------------------------------------------
    // Call Executor
    // -----------------------------------------------------------------------

    /// Perform one remote call with up to `retries` additional attempts
    /// on transport errors, then apply error detection to the result
    /// envelope.
    async fn invoke(
        &self,
        action: SoapAction,
        params: Value,
        mut retries: u32,
    ) -> Result<Value, EboekhoudenError> {
        let transport = self.transport().await?;
        let result = loop {
            match transport.call(action, &params).await {
                Ok(result) => break result,
                Err(err) if err.is_transport() && retries > 0 => {
                    debug!("client.invoke retrying action={action} left={retries}");
                    tokio::time::sleep(RETRY_DELAY).await;
                    retries -= 1;
                }
                Err(err) => return Err(err),
            }
        };

        if self.inner.options.debug {
            debug!("client.invoke action={action} result={result}");
        }

        check_error_descriptor(&result, action.as_str())?;
        if result.is_null() {
            return Err(EboekhoudenError::MissingResult {
                operation: action.as_str().to_string(),
            });
        }
        Ok(result)
    }

    /// Acquire a session, merge the token and secondary security code
    /// into the parameters, and delegate to [`invoke`](Self::invoke).
    async fn invoke_authenticated(
        &self,
        action: SoapAction,
        params: Value,
    ) -> Result<Value, EboekhoudenError> {
        let session_id = self.session_id().await?;
        let mut merged = Map::new();
        merged.insert("SessionID".into(), Value::String(session_id));
        merged.insert(
            "SecurityCode2".into(),
            json!(self.inner.options.credentials.security_code_2),
        );
        if let Value::Object(extra) = params {
            merged.extend(extra);
        }
        self.invoke(action, Value::Object(merged), self.inner.options.retries)
            .await
    }

    // -----------------------------------------------------------------------
    // Listing Operations
    // -----------------------------------------------------------------------

    /// List the administrations accessible to this account.
    pub async fn administrations(&self) -> Result<Vec<Administration>, EboekhoudenError> {
        debug!("client.administrations");
        let result = self
            .invoke_authenticated(SoapAction::GetAdministraties, json!({}))
            .await?;
        unwrap_list(
            &result,
            ["GetAdministratiesResult", "Administraties", "cAdministratie"],
        )
    }

    /// List articles matching the filter.
    pub async fn articles(
        &self,
        filter: ArticleFilter,
    ) -> Result<Vec<Article>, EboekhoudenError> {
        debug!("client.articles");
        let result = self
            .invoke_authenticated(SoapAction::GetArtikelen, json!({ "cFilter": filter }))
            .await?;
        unwrap_list(&result, ["GetArtikelenResult", "Artikelen", "cArtikel"])
    }

    /// List invoices matching the filter.
    pub async fn invoices(
        &self,
        filter: InvoiceFilter,
    ) -> Result<Vec<Invoice>, EboekhoudenError> {
        debug!("client.invoices");
        let result = self
            .invoke_authenticated(SoapAction::GetFacturen, json!({ "cFilter": filter }))
            .await?;
        unwrap_list(&result, ["GetFacturenResult", "Facturen", "cFactuurList"])
    }

    /// List ledger accounts matching the filter.
    pub async fn ledger_accounts(
        &self,
        filter: LedgerAccountFilter,
    ) -> Result<Vec<LedgerAccount>, EboekhoudenError> {
        debug!("client.ledger_accounts");
        let result = self
            .invoke_authenticated(
                SoapAction::GetGrootboekrekeningen,
                json!({ "cFilter": filter }),
            )
            .await?;
        unwrap_list(
            &result,
            [
                "GetGrootboekrekeningenResult",
                "Rekeningen",
                "cGrootboekrekening",
            ],
        )
    }

    /// List cost centers matching the filter.
    pub async fn cost_centers(
        &self,
        filter: CostCenterFilter,
    ) -> Result<Vec<CostCenter>, EboekhoudenError> {
        debug!("client.cost_centers");
        let result = self
            .invoke_authenticated(
                SoapAction::GetKostenplaatsen,
                json!({ "cFilter": filter }),
            )
            .await?;
        unwrap_list(
            &result,
            ["GetKostenplaatsenResult", "Kostenplaatsen", "cKostenplaats"],
        )
    }

    /// List mutations matching the filter.
    pub async fn mutations(
        &self,
        filter: MutationFilter,
    ) -> Result<Vec<Mutation>, EboekhoudenError> {
        debug!("client.mutations");
        let result = self
            .invoke_authenticated(SoapAction::GetMutaties, json!({ "cFilter": filter }))
            .await?;
        unwrap_list(&result, ["GetMutatiesResult", "Mutaties", "cMutatieList"])
    }

    /// List open items on the debtor or creditor side.
    pub async fn open_items(
        &self,
        kind: OpenItemKind,
    ) -> Result<Vec<OpenItem>, EboekhoudenError> {
        debug!("client.open_items");
        let result = self
            .invoke_authenticated(SoapAction::GetOpenPosten, json!({ "OpSoort": kind }))
            .await?;
        unwrap_list(&result, ["GetOpenPostenResult", "Openposten", "cOpenPost"])
    }

    /// List relations matching the filter.
    pub async fn relations(
        &self,
        filter: RelationFilter,
    ) -> Result<Vec<Relation>, EboekhoudenError> {
        debug!("client.relations");
        let result = self
            .invoke_authenticated(SoapAction::GetRelaties, json!({ "cFilter": filter }))
            .await?;
        unwrap_list(&result, ["GetRelatiesResult", "Relaties", "cRelatie"])
    }

    /// List ledger account balances matching the filter.
    pub async fn balances(
        &self,
        filter: BalancesFilter,
    ) -> Result<Vec<Balance>, EboekhoudenError> {
        debug!("client.balances");
        let result = self
            .invoke_authenticated(SoapAction::GetSaldi, json!({ "cFilter": filter }))
            .await?;
        unwrap_list(&result, ["GetSaldiResult", "Saldi", "cSaldo"])
    }

    /// The balance of a single ledger account.
    pub async fn balance(&self, filter: BalanceFilter) -> Result<f64, EboekhoudenError> {
        debug!("client.balance");
        let result = self
            .invoke_authenticated(SoapAction::GetSaldo, json!({ "cFilter": filter }))
            .await?;
        Ok(result
            .get("GetSaldoResult")
            .and_then(|r| r.get("Saldo"))
            .and_then(coerce_f64)
            .unwrap_or(0.0))
    }

    // -----------------------------------------------------------------------
    // Mutating Operations
    // -----------------------------------------------------------------------

    /// Create a ledger account, returning its ID when the service
    /// reports one.
    pub async fn add_ledger_account(
        &self,
        account: NewLedgerAccount,
    ) -> Result<Option<i64>, EboekhoudenError> {
        debug!("client.add_ledger_account");
        // The ID field is reserved; the service expects zero on create.
        let mut payload = Map::new();
        payload.insert("ID".into(), json!(0));
        merge_fields(&mut payload, &account)?;
        let result = self
            .invoke_authenticated(
                SoapAction::AddGrootboekrekening,
                json!({ "oGb": Value::Object(payload) }),
            )
            .await?;
        Ok(result
            .get("AddGrootboekrekeningResult")
            .and_then(|r| r.get("Gb_ID"))
            .and_then(coerce_i64))
    }

    /// Update a ledger account.
    pub async fn update_ledger_account(
        &self,
        update: LedgerAccountUpdate,
    ) -> Result<(), EboekhoudenError> {
        debug!("client.update_ledger_account");
        self.invoke_authenticated(
            SoapAction::UpdateGrootboekrekening,
            json!({ "oGb": update }),
        )
        .await?;
        Ok(())
    }

    /// Create a relation, returning its ID when the service reports one.
    pub async fn add_relation(
        &self,
        relation: NewRelation,
    ) -> Result<Option<i64>, EboekhoudenError> {
        debug!("client.add_relation");
        let result = self
            .invoke_authenticated(SoapAction::AddRelatie, json!({ "oRel": relation }))
            .await?;
        Ok(result
            .get("AddRelatieResult")
            .and_then(|r| r.get("Rel_ID"))
            .and_then(coerce_i64))
    }

    /// Update a relation.
    pub async fn update_relation(
        &self,
        update: RelationUpdate,
    ) -> Result<(), EboekhoudenError> {
        debug!("client.update_relation");
        self.invoke_authenticated(SoapAction::UpdateRelatie, json!({ "oRel": update }))
            .await?;
        Ok(())
    }

    /// Create an invoice, returning the invoice number the service
    /// assigned when it reports one.
    pub async fn add_invoice(
        &self,
        invoice: NewInvoice,
    ) -> Result<Option<String>, EboekhoudenError> {
        debug!("client.add_invoice");
        let result = self
            .invoke_authenticated(SoapAction::AddFactuur, json!({ "oFact": invoice }))
            .await?;
        Ok(result
            .get("AddFactuurResult")
            .and_then(|r| r.get("Factuurnummer"))
            .and_then(coerce_string))
    }

    /// Create a mutation, returning its number when the service reports
    /// one.
    pub async fn add_mutation(
        &self,
        mutation: NewMutation,
    ) -> Result<Option<i64>, EboekhoudenError> {
        debug!("client.add_mutation");
        let result = self
            .invoke_authenticated(SoapAction::AddMutatie, json!({ "oMut": mutation }))
            .await?;
        Ok(result
            .get("AddMutatieResult")
            .and_then(|r| r.get("Mutatienummer"))
            .and_then(coerce_i64))
    }
}

// ---------------------------------------------------------------------------
// Result unwrapping
// ---------------------------------------------------------------------------

/// Walk `path` into the result envelope and decode the nested collection,
/// accepting a lone object for single-element collections. A missing or
/// null collection yields an empty list, not an error.
fn unwrap_list<T: serde::de::DeserializeOwned>(
    envelope: &Value,
    path: [&str; 3],
) -> Result<Vec<T>, EboekhoudenError> {
    let mut value = envelope;
    for key in path {
        match value.get(key) {
            Some(next) => value = next,
            None => return Ok(Vec::new()),
        }
    }
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(decode).collect(),
        single => Ok(vec![decode(single)?]),
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, EboekhoudenError> {
    serde_json::from_value(value.clone()).map_err(|e| EboekhoudenError::Xml(e.to_string()))
}

fn merge_fields<T: serde::Serialize>(
    target: &mut Map<String, Value>,
    payload: &T,
) -> Result<(), EboekhoudenError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(fields)) => {
            target.extend(fields);
            Ok(())
        }
        Ok(other) => Err(EboekhoudenError::Xml(format!(
            "expected object payload, got {other}"
        ))),
        Err(e) => Err(EboekhoudenError::Xml(e.to_string())),
    }
}
