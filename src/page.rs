//! Page state machines over the backend endpoints.
//!
//! Each page owns one dataset, the view parameters applied to it, and a
//! fetch gate. Fetching moves the page Idle → Loading → Ready/Failed and may
//! cycle again on refresh; view parameter changes (search term, display
//! count, cloud shape, time variant) recompute the derived view and spec
//! from the already-fetched dataset without touching the network.
//!
//! The gate hands out sequence-numbered tokens so that when a refresh
//! supersedes an in-flight fetch, the superseded completion is discarded
//! instead of clobbering the newer result.

use rand::Rng;

use crate::api::{ApiError, Backend};
use crate::charts::cloud::CloudShape;
use crate::charts::line::TimeVariant;
use crate::charts::{bar, cloud, line, pie, ChartSpec};
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::payload::{LocationResponse, PublishTimesResponse, ThemeResponse, WordCloudResponse};
use crate::transform::{dataset_stats, derive_display, DatasetStats, DisplayView};

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Opaque fetch identity. Only the matching gate can redeem it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Monotonic sequence gate. Completions redeem their token; a token issued
/// before the latest `force_begin` is stale and its completion is dropped.
#[derive(Debug, Default)]
pub struct FetchGate {
    seq: u64,
    in_flight: bool,
}

impl FetchGate {
    /// Start a fetch unless one is already pending. Duplicate triggers while
    /// Loading coalesce into the pending fetch.
    pub fn begin(&mut self) -> Option<FetchToken> {
        if self.in_flight {
            return None;
        }
        self.seq += 1;
        self.in_flight = true;
        Some(FetchToken(self.seq))
    }

    /// Start a fetch unconditionally, superseding any pending one.
    pub fn force_begin(&mut self) -> FetchToken {
        self.seq += 1;
        self.in_flight = true;
        FetchToken(self.seq)
    }

    /// True if the token is still current; stale completions return false
    /// and must be discarded by the caller.
    pub fn complete(&mut self, token: FetchToken) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.in_flight = false;
        true
    }
}

fn settle<T>(state: &mut PageState<T>, page: &str, result: Result<T, ApiError>) {
    match result {
        Ok(data) => {
            log(Level::Info, Domain::Page, "ready", obj(&[("page", v_str(page))]));
            *state = PageState::Ready(data);
        }
        Err(e) => {
            log(
                Level::Warn,
                Domain::Page,
                "failed",
                obj(&[("page", v_str(page)), ("error", v_str(&e.to_string()))]),
            );
            *state = PageState::Failed(e.to_string());
        }
    }
}

/// Topic distribution page: searchable, truncated, ranked bar chart.
pub struct ThemePage {
    pub state: PageState<ThemeResponse>,
    pub gate: FetchGate,
    pub search: String,
    pub display_count: usize,
}

impl ThemePage {
    pub fn new(display_count: usize) -> Self {
        Self {
            state: PageState::Idle,
            gate: FetchGate::default(),
            search: String::new(),
            display_count,
        }
    }

    pub async fn refresh(&mut self, backend: &dyn Backend) {
        let token = self.gate.force_begin();
        self.state = PageState::Loading;
        let result = backend.theme_names().await;
        if self.gate.complete(token) {
            settle(&mut self.state, "themes", result);
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn set_display_count(&mut self, count: usize) {
        self.display_count = count;
    }

    pub fn view(&self) -> DisplayView {
        match self.state.data() {
            Some(resp) => derive_display(&resp.data, &self.search, self.display_count),
            None => DisplayView::default(),
        }
    }

    /// Bar percentages are taken against the page-level occurrence total,
    /// so filtering never inflates a topic's share.
    pub fn spec(&self) -> Option<ChartSpec> {
        let resp = self.state.data()?;
        let spec = bar::build(&self.view(), resp.total_count);
        log(
            Level::Debug,
            Domain::Chart,
            "bar_built",
            obj(&[("bars", v_num(self.view().len() as f64))]),
        );
        Some(spec)
    }

    /// Summary scalars over the full dataset, unaffected by search.
    pub fn stats(&self) -> Option<DatasetStats> {
        self.state.data().map(|resp| dataset_stats(&resp.data))
    }
}

/// Publish region page: donut over the top regions.
pub struct LocationPage {
    pub state: PageState<LocationResponse>,
    pub gate: FetchGate,
    pub display_count: usize,
}

impl LocationPage {
    pub fn new(display_count: usize) -> Self {
        Self {
            state: PageState::Idle,
            gate: FetchGate::default(),
            display_count,
        }
    }

    pub async fn refresh(&mut self, backend: &dyn Backend) {
        let token = self.gate.force_begin();
        self.state = PageState::Loading;
        let result = backend.publish_locations().await;
        if self.gate.complete(token) {
            settle(&mut self.state, "locations", result);
        }
    }

    pub fn set_display_count(&mut self, count: usize) {
        self.display_count = count;
    }

    pub fn view(&self) -> DisplayView {
        match self.state.data() {
            Some(resp) => derive_display(&resp.data, "", self.display_count),
            None => DisplayView::default(),
        }
    }

    pub fn spec(&self) -> Option<ChartSpec> {
        let resp = self.state.data()?;
        Some(pie::build(&self.view(), resp.total))
    }

    pub fn stats(&self) -> Option<DatasetStats> {
        self.state.data().map(|resp| dataset_stats(&resp.data))
    }
}

pub const CLOUD_WORDS_MIN: usize = 20;
pub const CLOUD_WORDS_MAX: usize = 100;

/// Keyword cloud page: shape and word-count knobs, with a randomize action.
pub struct CloudPage {
    pub state: PageState<WordCloudResponse>,
    pub gate: FetchGate,
    pub shape: CloudShape,
    pub max_words: usize,
}

impl CloudPage {
    pub fn new(shape: CloudShape, max_words: usize) -> Self {
        Self {
            state: PageState::Idle,
            gate: FetchGate::default(),
            shape,
            max_words,
        }
    }

    pub async fn refresh(&mut self, backend: &dyn Backend) {
        let token = self.gate.force_begin();
        self.state = PageState::Loading;
        let result = backend.word_cloud().await;
        if self.gate.complete(token) {
            settle(&mut self.state, "word_cloud", result);
        }
    }

    pub fn set_shape(&mut self, shape: CloudShape) {
        self.shape = shape;
    }

    pub fn set_max_words(&mut self, count: usize) {
        self.max_words = count;
    }

    /// Pick a random mask shape and a random word count in [20, 100).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.shape = CloudShape::ALL[rng.gen_range(0..CloudShape::ALL.len())];
        self.max_words = rng.gen_range(CLOUD_WORDS_MIN..CLOUD_WORDS_MAX);
    }

    pub fn reset(&mut self) {
        self.shape = CloudShape::Circle;
        self.max_words = 60;
    }

    pub fn view(&self) -> DisplayView {
        match self.state.data() {
            Some(resp) => derive_display(&resp.data, "", self.max_words),
            None => DisplayView::default(),
        }
    }

    pub fn spec<R: Rng>(&self, rng: &mut R) -> Option<ChartSpec> {
        let resp = self.state.data()?;
        Some(cloud::build(&self.view(), self.shape, resp.total_reasons, rng))
    }

    pub fn stats(&self) -> Option<DatasetStats> {
        self.state.data().map(|resp| dataset_stats(&resp.data))
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct TimesSummary {
    pub total_videos: u64,
    pub peak_hour: u32,
    pub peak_weekday: String,
    pub date_range: crate::payload::DateRange,
}

/// Publish time page: one dataset, three switchable series variants.
pub struct TimesPage {
    pub state: PageState<PublishTimesResponse>,
    pub gate: FetchGate,
    pub variant: TimeVariant,
}

impl TimesPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
            gate: FetchGate::default(),
            variant: TimeVariant::Hourly,
        }
    }

    pub async fn refresh(&mut self, backend: &dyn Backend) {
        let token = self.gate.force_begin();
        self.state = PageState::Loading;
        let result = backend.publish_times().await;
        if self.gate.complete(token) {
            settle(&mut self.state, "publish_times", result);
        }
    }

    /// Switching variants never refetches; all three series arrive in the
    /// original response.
    pub fn set_variant(&mut self, variant: TimeVariant) {
        self.variant = variant;
    }

    /// Backend display stats for the summary widgets. The peak fields are
    /// copy only; chart markers never read them.
    pub fn stats(&self) -> Option<TimesSummary> {
        self.state.data().map(|resp| TimesSummary {
            total_videos: resp.total_videos,
            peak_hour: resp.peak_hour,
            peak_weekday: resp.peak_weekday.clone(),
            date_range: resp.date_range.clone(),
        })
    }

    pub fn spec(&self) -> Option<ChartSpec> {
        self.spec_for(self.variant)
    }

    pub fn spec_for(&self, variant: TimeVariant) -> Option<ChartSpec> {
        let resp = self.state.data()?;
        let block = match variant {
            TimeVariant::Hourly => &resp.data.hourly,
            TimeVariant::Daily => &resp.data.daily,
            TimeVariant::Weekday => &resp.data.weekday,
        };
        Some(line::build(block, variant))
    }
}

impl Default for TimesPage {
    fn default() -> Self {
        Self::new()
    }
}
