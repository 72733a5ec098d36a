use crate::address::AccountAddress;
use crate::network::{EndpointConfig, Network};

/// Stored history entries; older ones fall off the end
pub const HISTORY_LIMIT: usize = 10;

/// History entries shown on the home screen
pub const RECENT_DISPLAY: usize = 5;

/// Persistable contents of an [`AddressStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub history: Vec<AccountAddress>,
    pub favorites: Vec<AccountAddress>,
    pub network: Network,
}

/// Searched and favorited addresses plus the network flag.
///
/// Owned by the front-end and handed to whatever needs it; the query client
/// never touches it. History is most-recently-used first: re-adding an
/// address moves it to the front instead of duplicating it.
#[derive(Debug, Clone, Default)]
pub struct AddressStore {
    history: Vec<AccountAddress>,
    favorites: Vec<AccountAddress>,
    network: Network,
}

impl AddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a persisted snapshot, normalizing it on the way in
    pub fn init(snapshot: StoreSnapshot) -> Self {
        let mut store = Self {
            network: snapshot.network,
            ..Self::default()
        };
        // Oldest first so the newest ends up in front
        for address in snapshot.history.into_iter().rev() {
            store.add_to_history(address);
        }
        for address in snapshot.favorites {
            store.add_favorite(address);
        }
        store
    }

    /// Back to the initial state: empty lists, mainnet
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            history: self.history.clone(),
            favorites: self.favorites.clone(),
            network: self.network,
        }
    }

    // ==================== History ====================

    pub fn add_to_history(&mut self, address: AccountAddress) {
        self.history.retain(|a| a != &address);
        self.history.insert(0, address);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn remove_from_history(&mut self, index: usize) -> Option<AccountAddress> {
        (index < self.history.len()).then(|| self.history.remove(index))
    }

    pub fn history(&self) -> &[AccountAddress] {
        &self.history
    }

    /// The `n` most recent entries
    pub fn recent(&self, n: usize) -> &[AccountAddress] {
        &self.history[..n.min(self.history.len())]
    }

    // ==================== Favorites ====================

    pub fn add_favorite(&mut self, address: AccountAddress) {
        if !self.is_favorite(&address) {
            self.favorites.push(address);
        }
    }

    pub fn remove_favorite(&mut self, address: &AccountAddress) {
        self.favorites.retain(|a| a != address);
    }

    /// Flip membership and return the new state
    pub fn toggle_favorite(&mut self, address: &AccountAddress) -> bool {
        if self.is_favorite(address) {
            self.remove_favorite(address);
            false
        } else {
            self.add_favorite(address.clone());
            true
        }
    }

    pub fn is_favorite(&self, address: &AccountAddress) -> bool {
        self.favorites.contains(address)
    }

    pub fn favorites(&self) -> &[AccountAddress] {
        &self.favorites
    }

    // ==================== Network ====================

    pub fn toggle_network(&mut self) -> Network {
        self.network = self.network.toggled();
        self.network
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn endpoint(&self) -> EndpointConfig {
        crate::network::configure(self.network)
    }
}
