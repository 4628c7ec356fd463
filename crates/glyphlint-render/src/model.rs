#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
    NoAdoption,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub icemap_id: String,
    pub require_adoption: bool,
    pub tokens_scanned: u32,
    pub tokens_unique: u32,
    pub tokens_malformed: u32,
    pub load: Option<String>,
    pub pressure: Option<String>,
    pub ready_tier: Option<String>,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
