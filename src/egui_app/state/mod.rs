use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::egui_app::auth::{sign_in_with_google, AuthState};
use crate::egui_app::board_api::BoardApiClient;
use crate::egui_app::easter_egg::EasterEggTracker;
use crate::egui_app::toast::{ToastVariant, Toaster};
use crate::egui_app::types::{ApiEvent, AppView};
use crate::egui_app::Config;
use crate::shared::{Message, SendMessageRequest};

/// Session state for one run of the desktop client.
///
/// Built once at startup and handed to every view by `&mut`.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub id_token_input: String,
    pub message_input: String,
    /// Messages from the last admin listing
    pub messages: Vec<Message>,
    pub sending: bool,
    pub loading_messages: bool,
    pub eggs: EasterEggTracker,
    pub toaster: Toaster,
    events_tx: Sender<ApiEvent>,
    events_rx: Receiver<ApiEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let (events_tx, events_rx) = channel();
        tracing::debug!("AppState initialized for {}", config.server_url());

        Self {
            config,
            auth_state: AuthState::new(),
            current_view: AppView::Auth,
            id_token_input: String::new(),
            message_input: String::new(),
            messages: Vec::new(),
            sending: false,
            loading_messages: false,
            eggs: EasterEggTracker::default(),
            toaster: Toaster::default(),
            events_tx,
            events_rx,
        }
    }

    /// Advance timers and drain finished API calls. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event, now);
        }
        self.eggs.poll(now);
        self.toaster.poll(now);
    }

    /// Earliest instant at which `tick` has something to expire
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.eggs.next_deadline(), self.toaster.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn click_logo(&mut self, now: Instant) {
        if let Some(notification) = self.eggs.click(now) {
            self.toaster.notify(notification, now);
        }
    }

    pub fn apply_event(&mut self, event: ApiEvent, now: Instant) {
        match event {
            ApiEvent::SignedIn(result) => {
                self.auth_state.loading = false;
                match result {
                    Ok((token, principal)) => {
                        tracing::info!("Signed in as {}", principal.uid);
                        self.config.set_token(Some(token));
                        self.auth_state.authenticated = true;
                        self.auth_state.principal = Some(principal);
                        self.auth_state.error = None;
                        self.id_token_input.clear();
                        self.current_view = AppView::Board;
                    }
                    Err(e) => {
                        tracing::warn!("Sign-in failed: {}", e);
                        self.auth_state.set_error(e);
                    }
                }
            }
            ApiEvent::MessageSent(result) => {
                self.sending = false;
                match result {
                    Ok(()) => {
                        self.message_input.clear();
                        self.toaster.toast(
                            "Message sent",
                            None,
                            ToastVariant::Default,
                            Duration::from_secs(2),
                            now,
                        );
                    }
                    Err(e) => {
                        self.toaster.error("Could not send message", e, now);
                    }
                }
            }
            ApiEvent::MessagesLoaded(result) => {
                self.loading_messages = false;
                match result {
                    Ok(messages) => self.messages = messages,
                    Err(e) => {
                        self.toaster.error("Could not load messages", e, now);
                    }
                }
            }
        }
    }

    pub fn handle_sign_in(&mut self) {
        let id_token = self.id_token_input.trim().to_string();
        if id_token.is_empty() {
            self.auth_state.set_error("An ID token is required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let config = self.config.clone();
        let tx = self.events_tx.clone();
        std::thread::spawn(move || {
            let result = sign_in_with_google(&config, id_token.clone())
                .map(|principal| (id_token, principal));
            let _ = tx.send(ApiEvent::SignedIn(result));
        });
    }

    pub fn send_message(&mut self, now: Instant) {
        let request = SendMessageRequest::new(self.message_input.trim());
        if let Err(e) = request.validate() {
            self.toaster.error("Could not send message", e.to_string(), now);
            return;
        }

        self.sending = true;
        let client = BoardApiClient::new(self.config.clone());
        let tx = self.events_tx.clone();
        std::thread::spawn(move || {
            let result = client.post_message(&request.text);
            let _ = tx.send(ApiEvent::MessageSent(result));
        });
    }

    pub fn refresh_messages(&mut self) {
        self.loading_messages = true;
        let client = BoardApiClient::new(self.config.clone());
        let tx = self.events_tx.clone();
        std::thread::spawn(move || {
            let result = client.list_messages();
            let _ = tx.send(ApiEvent::MessagesLoaded(result));
        });
    }

    /// Forget the principal. Easter-egg progress lives for the whole session.
    pub fn logout(&mut self) {
        self.config.clear_token();
        self.auth_state = AuthState::new();
        self.messages.clear();
        self.message_input.clear();
        self.current_view = AppView::Auth;
    }
}
