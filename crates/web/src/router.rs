//! Hash-fragment routing.
//!
//! [`parse_fragment`] turns `#/artists/jane-doe` into a [`RouteState`].
//! [`Location`] is the navigation source (current fragment plus back
//! history) and [`HashRouter`] follows it, recomputing the route state and
//! bumping a navigation generation on every change. A
//! [`NavigationTicket`] taken before an async load tells whether its result
//! still belongs to the current route.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

/// Name of the only path parameter.
pub const SLUG_PARAM: &str = "slug";

/// Every client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    Home,
    Artists,
    ArtistDetail,
    About,
    Contact,
    Login,
    Signup,
    Gallery,
    Services,
    Faq,
    Testimonials,
}

impl RouteId {
    pub const ALL: [RouteId; 11] = [
        RouteId::Home,
        RouteId::Artists,
        RouteId::ArtistDetail,
        RouteId::About,
        RouteId::Contact,
        RouteId::Login,
        RouteId::Signup,
        RouteId::Gallery,
        RouteId::Services,
        RouteId::Faq,
        RouteId::Testimonials,
    ];

    /// The path pattern this route is registered under.
    pub fn pattern(self) -> &'static str {
        match self {
            RouteId::Home => "/",
            RouteId::Artists => "/artists",
            RouteId::ArtistDetail => "/artists/:slug",
            RouteId::About => "/about",
            RouteId::Contact => "/contact",
            RouteId::Login => "/login",
            RouteId::Signup => "/signup",
            RouteId::Gallery => "/gallery",
            RouteId::Services => "/services",
            RouteId::Faq => "/faq",
            RouteId::Testimonials => "/testimonials",
        }
    }

    /// Inverse of [`RouteId::pattern`]; unknown patterns map to `Home`.
    pub fn from_pattern(pattern: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|id| id.pattern() == pattern)
            .unwrap_or(RouteId::Home)
    }

    /// Routes addressed by a single fixed segment.
    fn from_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "about" => RouteId::About,
            "contact" => RouteId::Contact,
            "login" => RouteId::Login,
            "signup" => RouteId::Signup,
            "gallery" => RouteId::Gallery,
            "services" => RouteId::Services,
            "faq" => RouteId::Faq,
            "testimonials" => RouteId::Testimonials,
            _ => return None,
        })
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A parsed route: identifier plus named path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    pub id: RouteId,
    pub params: BTreeMap<String, String>,
}

impl RouteState {
    pub fn new(id: RouteId) -> Self {
        Self {
            id,
            params: BTreeMap::new(),
        }
    }

    pub fn home() -> Self {
        Self::new(RouteId::Home)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn slug(&self) -> Option<&str> {
        self.param(SLUG_PARAM)
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::home()
    }
}

/// Parse a URL fragment (with or without the leading `#`).
///
/// Unrecognized fragments silently resolve to `Home`. Slugs are taken
/// verbatim, so `#/artists/about` is the detail page of an artist whose slug
/// is `about`.
pub fn parse_fragment(fragment: &str) -> RouteState {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => RouteState::home(),
        ["artists"] => RouteState::new(RouteId::Artists),
        ["artists", slug, ..] => {
            let mut state = RouteState::new(RouteId::ArtistDetail);
            state.params.insert(SLUG_PARAM.to_string(), (*slug).to_string());
            state
        }
        [first, ..] => RouteId::from_segment(first)
            .map(RouteState::new)
            .unwrap_or_default(),
    }
}

/// The navigation source: current fragment and back history.
pub struct Location {
    current: watch::Sender<String>,
    history: Mutex<Vec<String>>,
}

impl Location {
    pub fn new(initial: impl Into<String>) -> Self {
        let (current, _) = watch::channel(initial.into());
        Self {
            current,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Go to `fragment`, remembering the current one for [`Location::back`].
    pub fn navigate(&self, fragment: impl Into<String>) {
        let previous = self.current.send_replace(fragment.into());
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(previous);
    }

    /// Return to the previous fragment. Returns `false` at the start of
    /// history.
    pub fn back(&self) -> bool {
        let previous = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        match previous {
            Some(fragment) => {
                self.current.send_replace(fragment);
                true
            }
            None => false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("")
    }
}

/// Follows a [`Location`] and keeps the current [`RouteState`].
///
/// Dropping the router unsubscribes it.
pub struct HashRouter {
    location: watch::Receiver<String>,
    state: RouteState,
    generation: Arc<AtomicU64>,
}

impl HashRouter {
    /// Subscribe to `location` and compute the initial state.
    pub fn attach(location: &Location) -> Self {
        let mut receiver = location.subscribe();
        let state = parse_fragment(&receiver.borrow_and_update());
        Self {
            location: receiver,
            state,
            generation: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Apply a pending location change without waiting. Returns `true` if
    /// the state was recomputed.
    pub fn sync(&mut self) -> bool {
        match self.location.has_changed() {
            Ok(true) => {
                self.recompute();
                true
            }
            _ => false,
        }
    }

    /// Wait for the next location change and recompute. Returns `None` once
    /// the location is gone.
    pub async fn changed(&mut self) -> Option<&RouteState> {
        self.location.changed().await.ok()?;
        self.recompute();
        Some(&self.state)
    }

    /// Capture the current navigation generation.
    pub fn ticket(&self) -> NavigationTicket {
        NavigationTicket {
            issued: self.generation(),
            current: Arc::clone(&self.generation),
        }
    }

    fn recompute(&mut self) {
        let fragment = self.location.borrow_and_update().clone();
        self.state = parse_fragment(&fragment);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(%fragment, route = %self.state.id, generation, "Route changed");
    }
}

/// Proof of which navigation an async load was started for.
#[derive(Debug, Clone)]
pub struct NavigationTicket {
    issued: u64,
    current: Arc<AtomicU64>,
}

impl NavigationTicket {
    /// Whether no navigation happened since the ticket was taken.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.issued
    }

    /// `Some(value)` if the ticket is still current, `None` for stale results.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            tracing::debug!(issued = self.issued, "Discarding stale result");
            None
        }
    }
}
