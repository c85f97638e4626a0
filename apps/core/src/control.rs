use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::{self, ConfigError, Options};
use crate::debounce::QueryDebouncer;
use crate::geocoding::{GeocodeError, SearchRequest};
use crate::language::{self, LanguageList, LocaleProvider};
use crate::localization;
use crate::marker::{MapHost, MarkerController};
use crate::model::{Feature, LngLat, SelectedResult};
use crate::query;
use crate::session::{ResultSession, SessionStatus};
use crate::visibility::{BlurTarget, VisibilityState, VisibilityStateMachine};

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    Loading { query: String },
    Results { features: Vec<Feature> },
    Result { result: SelectedResult },
    Error { error: GeocodeError },
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Char(char),
    Other,
}

type ClearFn = Box<dyn FnMut(&mut GeocoderControl)>;

// The orchestrator. Owns the field value and every piece of query
// state; the host feeds it input events and carries its SearchRequests
// to the transport, delivering outcomes back via handle_response.
pub struct GeocoderControl {
    options: Options,
    language: LanguageList,
    placeholder: String,
    value: String,
    fresh: bool,
    focused: bool,
    debouncer: QueryDebouncer,
    session: ResultSession,
    marker: MarkerController,
    visibility: VisibilityStateMachine,
    events: VecDeque<ControlEvent>,
    clear_override: Option<ClearFn>,
}

impl GeocoderControl {
    pub fn new(
        options: Options,
        locales: &dyn LocaleProvider,
        map: Box<dyn MapHost>,
    ) -> Result<Self, ConfigError> {
        config::validate(&options)?;
        let language = language::resolve(options.language.as_deref(), locales);
        let placeholder = options
            .placeholder
            .clone()
            .unwrap_or_else(|| localization::placeholder(&language).to_string());
        let debouncer = QueryDebouncer::new(Duration::from_millis(options.debounce_ms));
        let visibility = VisibilityStateMachine::new(options.collapsed);

        Ok(Self {
            options,
            language,
            placeholder,
            value: String::new(),
            fresh: true,
            focused: false,
            debouncer,
            session: ResultSession::new(),
            marker: MarkerController::new(map),
            visibility,
            events: VecDeque::new(),
            clear_override: None,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn language(&self) -> &LanguageList {
        &self.language
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn session_status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn map_marker(&self) -> Option<LngLat> {
        self.marker.position()
    }

    pub fn selected(&self) -> Option<&SelectedResult> {
        self.session.selected()
    }

    pub fn candidates(&self) -> &[Feature] {
        self.session.candidates()
    }

    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain(..).collect()
    }

    // Programmatic population only; never fires a query.
    pub fn set_input(&mut self, text: &str) {
        self.value = text.to_string();
        self.visibility.set_has_value(!self.value.is_empty());
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
        self.visibility.focus_in();
    }

    pub fn on_hover_in(&mut self) {
        self.visibility.hover_in();
    }

    pub fn on_hover_out(&mut self) {
        self.visibility.hover_out();
    }

    // Blur with no related element is ambiguous (focus may come back
    // from platform chrome), so it neither clears nor drops the focus
    // assertion. Blur to a concrete element is a real departure.
    pub fn on_blur(&mut self, target: BlurTarget) {
        self.visibility.focus_out(target);
        if target == BlurTarget::Window {
            return;
        }

        self.focused = false;
        if self.options.clear_on_blur {
            self.clear();
        }
    }

    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Tab => {}
            Key::Escape => {
                if self.options.clear_and_blur_on_esc {
                    self.clear();
                    self.focused = false;
                    self.visibility.focus_out(BlurTarget::Element);
                }
            }
            Key::Char(_) | Key::Other => {
                // A shown result belongs to the previous query; any
                // edit key starts a fresh session.
                if self.session.selected().is_some() {
                    self.clear();
                }
            }
        }
    }

    pub fn on_text_changed(&mut self, text: &str, now: Instant) {
        self.value = text.to_string();
        self.visibility.set_has_value(!self.value.is_empty());
        if self.value.trim().is_empty() {
            self.debouncer.cancel();
        } else {
            self.debouncer.schedule(&self.value, now);
        }
    }

    // Immediate submission, bypassing the debounce window.
    pub fn query(&mut self, text: &str) -> SearchRequest {
        self.set_input(text);
        self.submit(text)
    }

    // Drives the debouncer; a due deadline submits exactly like query().
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        let text = self.debouncer.due(now)?;
        Some(self.submit(&text))
    }

    fn submit(&mut self, text: &str) -> SearchRequest {
        self.debouncer.cancel();
        self.fresh = false;
        let sequence = self.session.begin(text);
        self.events.push_back(ControlEvent::Loading {
            query: text.to_string(),
        });
        SearchRequest {
            sequence,
            query: text.to_string(),
            kind: query::interpret(text),
            language: self.language.as_query_value(),
            types: self.options.types.clone(),
            limit: self.options.limit,
        }
    }

    pub fn handle_response(
        &mut self,
        sequence: u64,
        outcome: Result<Vec<Feature>, GeocodeError>,
    ) {
        if !self.session.accepts(sequence) {
            // Superseded or cleared; the late response is dropped
            // without touching the marker or emitting anything.
            return;
        }

        match outcome {
            Ok(features) => {
                self.events.push_back(ControlEvent::Results {
                    features: features.clone(),
                });
                match self.session.resolve(features) {
                    Some(result) => self.apply_selection(result),
                    None => self.marker.remove(),
                }
            }
            Err(error) => {
                self.session.fail();
                self.events.push_back(ControlEvent::Error { error });
            }
        }
    }

    // Explicit pick from the resolved candidate list.
    pub fn select(&mut self, index: usize) -> bool {
        match self.session.select(index) {
            Some(result) => {
                self.apply_selection(result);
                true
            }
            None => false,
        }
    }

    fn apply_selection(&mut self, result: SelectedResult) {
        self.marker.replace(result.center);
        let display = result.place_name.clone();
        self.set_input(&display);
        self.events.push_back(ControlEvent::Result { result });
    }

    // Replaces the clear behavior entirely; Escape- and blur-triggered
    // clears go through the substituted callable too.
    pub fn set_clear_override(&mut self, clear: impl FnMut(&mut GeocoderControl) + 'static) {
        self.clear_override = Some(Box::new(clear));
    }

    pub fn clear(&mut self) {
        if let Some(mut clear) = self.clear_override.take() {
            clear(self);
            if self.clear_override.is_none() {
                self.clear_override = Some(clear);
            }
            return;
        }
        self.default_clear();
    }

    pub fn default_clear(&mut self) {
        self.debouncer.cancel();
        self.session.clear();
        self.marker.remove();
        self.value.clear();
        self.visibility.set_has_value(false);
        self.fresh = true;
        self.events.push_back(ControlEvent::Clear);
    }
}
