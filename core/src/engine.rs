//! The mock engine — one entry point per endpoint operation.
//!
//! PER-REQUEST PIPELINE (fixed, never reordered):
//!   1. Build a MockRng from the request's RequestKey. Numeric keys
//!      seed it; report creation (keyed by customer name) and token
//!      issuance (no key at all) run unseeded.
//!   2. Outcome policy draws the success flag (first draw).
//!   3. The domain synthesizer continues on the same stream.
//!   4. The reply is assembled with its status code.
//!
//! RULES:
//!   - The engine is immutable after construction; share it behind Arc.
//!   - No RNG state outlives a request.
//!   - Keys reach the engine already validated (see types.rs).

use crate::{
    auth_subsystem,
    clock::MockClock,
    config::MockConfig,
    error::MockResult,
    frigos_subsystem, gio_subsystem,
    outcome::OutcomePolicy,
    request::{self, ReportRequest, TokenRequest},
    response::{
        BillingBody, CustomerBody, FolioBody, Reply, ReportCreatedBody, ReportStatusBody,
        TokenBody,
    },
    rng::MockRng,
    types::{Folio, Msisdn, ReportNumber, RequestKey},
};

/// Every operation the engine serves. Used to label logs and to
/// shape error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Token,
    CreateReport,
    ReportStatus,
    Customer,
    Block,
    Reactivate,
    Billing,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Token => "auth_token",
            Self::CreateReport => "frigos_levantar_reporte",
            Self::ReportStatus => "frigos_seguimiento_reporte",
            Self::Customer => "gio_consulta_cliente",
            Self::Block => "gio_bloquear",
            Self::Reactivate => "gio_reactivar",
            Self::Billing => "gio_facturacion",
        }
    }

    /// Entity fields nulled in this endpoint's error envelope.
    pub fn entity_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Token => &[],
            Self::CreateReport => &["reporte"],
            Self::ReportStatus => &["estado"],
            Self::Customer => &["balance", "plan"],
            Self::Block | Self::Reactivate => &["folio"],
            Self::Billing => &["facturacion"],
        }
    }

    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Token)
    }
}

pub struct MockEngine {
    config: MockConfig,
    policy: OutcomePolicy,
    clock:  MockClock,
}

impl MockEngine {
    pub fn new(config: MockConfig) -> MockResult<Self> {
        let policy = OutcomePolicy::from_config(&config)?;
        let clock = config.clock();
        Ok(Self { config, policy, clock })
    }

    /// Engine over MockConfig::default_test().
    pub fn build_test() -> MockResult<Self> {
        Self::new(MockConfig::default_test())
    }

    pub fn with_clock(mut self, clock: MockClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn check_api_key(&self, header: Option<&str>) -> MockResult<()> {
        request::check_api_key(header, self.config.api_key_length)
    }

    /// `POST /auth/token`. Expiry is always relative to wall-clock time
    /// so the token is in the future even when dates are pinned.
    pub fn issue_token(&self, req: &TokenRequest) -> MockResult<Reply<TokenBody>> {
        req.validate()?;
        let mut rng = MockRng::unseeded();
        let body = auth_subsystem::issue_token(
            self.config.token_length,
            self.config.token_ttl_max_secs,
            MockClock::System.now(),
            &mut rng,
        );
        log::debug!("{}: token issued for {}", Endpoint::Token.name(), req.username);
        Ok(Reply::ok(body))
    }

    /// `POST /frigos/reporte`.
    pub fn create_report(&self, req: &ReportRequest) -> Reply<ReportCreatedBody> {
        let mut rng = MockRng::for_key(&RequestKey::CustomerName(req.nombre.clone()));
        let body = frigos_subsystem::create_report(&self.policy, req, &mut rng);
        Reply::created(body)
    }

    /// `GET /frigos/reporte/{report}`.
    pub fn report_status(&self, report: ReportNumber) -> Reply<ReportStatusBody> {
        let mut rng = MockRng::for_key(&RequestKey::Report(report));
        Reply::ok(frigos_subsystem::report_status(&self.policy, report, &mut rng))
    }

    /// `GET /gio/cliente/{msisdn}`.
    pub fn customer(&self, msisdn: Msisdn) -> Reply<CustomerBody> {
        let mut rng = MockRng::for_key(&RequestKey::Msisdn(msisdn));
        Reply::ok(gio_subsystem::customer(
            &self.policy,
            msisdn,
            self.config.balance_on_failure,
            &mut rng,
        ))
    }

    /// `PUT /gio/bloquear/{msisdn}`.
    pub fn block_line(&self, msisdn: Msisdn) -> MockResult<Reply<FolioBody>> {
        let mut rng = MockRng::for_key(&RequestKey::Msisdn(msisdn));
        Ok(Reply::ok(gio_subsystem::block_line(&self.policy, msisdn, &mut rng)?))
    }

    /// `POST /gio/reactivar/{msisdn}`.
    pub fn reactivate_line(&self, msisdn: Msisdn, block_folio: Folio) -> MockResult<Reply<FolioBody>> {
        let mut rng = MockRng::for_key(&RequestKey::Msisdn(msisdn));
        Ok(Reply::ok(gio_subsystem::reactivate_line(
            &self.policy,
            msisdn,
            block_folio,
            &mut rng,
        )?))
    }

    /// `GET /gio/facturacion/{msisdn}`.
    pub fn billing(&self, msisdn: Msisdn) -> MockResult<Reply<BillingBody>> {
        let mut rng = MockRng::for_key(&RequestKey::Msisdn(msisdn));
        Ok(Reply::ok(gio_subsystem::billing(
            &self.policy,
            msisdn,
            self.clock.today(),
            &mut rng,
        )?))
    }
}
