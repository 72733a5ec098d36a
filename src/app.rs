use crate::address::AccountAddress;
use crate::config::Config;
use crate::network::{EndpointConfig, Network};
use crate::rpc::{
    explorer_account_url, QueryClient, QueryError, TransactionSummary, WalletSnapshot,
};
use crate::store::{AddressStore, RECENT_DISPLAY};
use tracing::info;
use tui_input::Input;

/// Filled in by Ctrl+D on the home screen
pub const DEMO_ADDRESS: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Loading(String),
    Wallet(WalletResult),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct WalletResult {
    pub snapshot: WalletSnapshot,
    pub selected: usize, // tokens first, then transactions
}

impl WalletResult {
    fn link_count(&self) -> usize {
        self.snapshot.tokens.len() + self.snapshot.transactions.len()
    }
}

/// Something on the wallet screen the user can open
#[derive(Debug, Clone, PartialEq)]
pub enum NavLink {
    /// Token mint for a detail view
    Token(AccountAddress),
    /// Transaction for the external explorer
    Transaction(TransactionSummary),
}

impl NavLink {
    /// The identifier or URL handed to whatever opens the link
    pub fn target(&self, network: Network) -> String {
        match self {
            Self::Token(mint) => mint.to_string(),
            Self::Transaction(tx) => tx.explorer_url(network),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Recent,
    Favorite,
}

/// A selectable row on the home screen
#[derive(Debug, Clone, PartialEq)]
pub struct HomeEntry {
    pub address: AccountAddress,
    pub kind: EntryKind,
}

pub struct App {
    pub config: Config,
    pub store: AddressStore,
    pub screen: Screen,
    pub history: Vec<Screen>,
    pub search_input: Input,
    pub selected_home_index: Option<usize>,
    pub status: Option<String>,
    pub should_quit: bool,
    /// Write the store back to the config file after every change
    pub autosave: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = AddressStore::init(config.store_snapshot());

        Self {
            config,
            store,
            screen: Screen::Home,
            history: Vec::new(),
            search_input: Input::default(),
            selected_home_index: None,
            status: None,
            should_quit: false,
            autosave: false,
        }
    }

    fn persist(&mut self) {
        if self.autosave {
            let _ = self.config.remember(&self.store);
        }
    }

    pub fn network(&self) -> Network {
        self.store.network()
    }

    pub fn endpoint(&self) -> EndpointConfig {
        self.config.endpoint(self.network())
    }

    pub fn query_client(&self) -> Result<QueryClient, QueryError> {
        QueryClient::new(self.endpoint(), self.config.request_timeout())
    }

    pub fn toggle_network(&mut self) {
        let network = self.store.toggle_network();
        info!(%network, "network switched");
        self.status = Some(format!("Switched to {network}"));
        self.persist();
    }

    // ==================== Home screen ====================

    /// Recent searches (newest first, at most five) followed by favorites
    pub fn home_entries(&self) -> Vec<HomeEntry> {
        let recent = self
            .store
            .recent(RECENT_DISPLAY)
            .iter()
            .map(|address| HomeEntry {
                address: address.clone(),
                kind: EntryKind::Recent,
            });
        let favorites = self.store.favorites().iter().map(|address| HomeEntry {
            address: address.clone(),
            kind: EntryKind::Favorite,
        });

        recent.chain(favorites).collect()
    }

    pub fn select_home_prev(&mut self) {
        let len = self.home_entries().len();
        if len == 0 {
            return;
        }

        self.selected_home_index = match self.selected_home_index {
            None => Some(len - 1),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_home_next(&mut self) {
        let len = self.home_entries().len();
        if len == 0 {
            return;
        }

        self.selected_home_index = match self.selected_home_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_home_address(&self) -> Option<AccountAddress> {
        self.selected_home_index
            .and_then(|i| self.home_entries().get(i).map(|e| e.address.clone()))
    }

    pub fn clear_home_selection(&mut self) {
        self.selected_home_index = None;
    }

    /// Delete the selected row if it is a recent search; favorites stay
    pub fn delete_selected_history(&mut self) {
        let Some(idx) = self.selected_home_index else {
            return;
        };
        let entries = self.home_entries();
        if !matches!(entries.get(idx), Some(e) if e.kind == EntryKind::Recent) {
            return;
        }

        // Recent rows come first, so the row index is the history index
        self.store.remove_from_history(idx);
        self.persist();

        let len = self.home_entries().len();
        if len == 0 {
            self.selected_home_index = None;
        } else if idx >= len {
            self.selected_home_index = Some(len - 1);
        }
    }

    pub fn fill_demo_address(&mut self) {
        self.clear_home_selection();
        self.search_input = Input::new(DEMO_ADDRESS.to_string());
    }

    /// Take the search bar contents as an address. Blank input shows an error.
    pub fn submit_search(&mut self) -> Option<AccountAddress> {
        match AccountAddress::parse(self.search_input.value()) {
            Ok(address) => {
                self.search_input.reset();
                Some(address)
            }
            Err(e) => {
                self.set_error(e.to_string());
                None
            }
        }
    }

    /// Record a search that is about to run
    pub fn record_search(&mut self, address: &AccountAddress) {
        self.store.add_to_history(address.clone());
        self.persist();
    }

    // ==================== Navigation ====================

    pub fn navigate_to(&mut self, screen: Screen) {
        if !matches!(self.screen, Screen::Home | Screen::Loading(_)) {
            self.history.push(self.screen.clone());
        }
        self.status = None;
        self.screen = screen;
    }

    pub fn go_back(&mut self) -> bool {
        self.status = None;
        if let Some(prev) = self.history.pop() {
            self.screen = prev;
            true
        } else {
            self.go_home();
            true
        }
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.status = None;
        self.screen = Screen::Home;
    }

    pub fn set_loading(&mut self, msg: &str) {
        // Save current screen to history before showing loading (if it's a navigable screen)
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Loading(msg.to_string());
    }

    pub fn set_error(&mut self, msg: String) {
        // Save current screen to history before showing error (if it's a navigable screen)
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Error(msg);
    }

    /// Apply a finished search. Failures never touch earlier results; they
    /// stay one "back" away.
    pub fn apply_search(&mut self, result: Result<WalletSnapshot, QueryError>) {
        match result {
            Ok(snapshot) => self.set_wallet_result(snapshot),
            Err(e) => self.set_error(format!("{}: {e}", e.kind())),
        }
    }

    pub fn set_wallet_result(&mut self, snapshot: WalletSnapshot) {
        // A refresh replaces the stale copy of the same wallet
        if matches!(
            self.history.last(),
            Some(Screen::Wallet(prev))
                if prev.snapshot.address == snapshot.address
                    && prev.snapshot.network == snapshot.network
        ) {
            self.history.pop();
        }
        self.navigate_to(Screen::Wallet(WalletResult {
            snapshot,
            selected: 0,
        }));
    }

    pub fn is_on_home(&self) -> bool {
        matches!(self.screen, Screen::Home)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading(_))
    }

    // ==================== Wallet screen ====================

    /// Address of the wallet on screen, if any
    pub fn current_address(&self) -> Option<&AccountAddress> {
        match &self.screen {
            Screen::Wallet(result) => Some(&result.snapshot.address),
            _ => None,
        }
    }

    pub fn is_favorite(&self, address: &AccountAddress) -> bool {
        self.store.is_favorite(address)
    }

    pub fn toggle_favorite(&mut self) {
        let Some(address) = self.current_address().cloned() else {
            return;
        };
        let now_favorite = self.store.toggle_favorite(&address);
        self.status = Some(if now_favorite {
            "Added to favorites".to_string()
        } else {
            "Removed from favorites".to_string()
        });
        self.persist();
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        if let Screen::Wallet(result) = &mut self.screen {
            let max = result.link_count();
            if max > 0 {
                if result.selected > 0 {
                    result.selected -= 1;
                } else {
                    result.selected = max - 1;
                }
            }
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if let Screen::Wallet(result) = &mut self.screen {
            let max = result.link_count();
            if max > 0 {
                result.selected = (result.selected + 1) % max;
            }
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        let Screen::Wallet(result) = &self.screen else {
            return None;
        };
        let tokens = &result.snapshot.tokens;

        if result.selected < tokens.len() {
            Some(NavLink::Token(tokens[result.selected].mint.clone()))
        } else {
            result
                .snapshot
                .transactions
                .get(result.selected - tokens.len())
                .cloned()
                .map(NavLink::Transaction)
        }
    }

    /// Resolve the selected link and show it in the status line
    pub fn open_selected(&mut self) -> Option<String> {
        let Screen::Wallet(result) = &self.screen else {
            return None;
        };
        let network = result.snapshot.network;
        let link = self.get_selected_link()?;
        let target = link.target(network);

        self.status = Some(match link {
            NavLink::Token(_) => format!("Token mint: {target}"),
            NavLink::Transaction(_) => format!("Explorer: {target}"),
        });
        Some(target)
    }

    /// Explorer page for the wallet on screen
    pub fn account_url(&self) -> Option<String> {
        match &self.screen {
            Screen::Wallet(result) => Some(explorer_account_url(
                result.snapshot.address.as_str(),
                result.snapshot.network,
            )),
            _ => None,
        }
    }

    /// Show the wallet's explorer page in the status line
    pub fn open_account(&mut self) -> Option<String> {
        let url = self.account_url()?;
        self.status = Some(format!("Explorer: {url}"));
        Some(url)
    }
}
