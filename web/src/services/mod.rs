//! Browser adapters for the shared core

pub mod ethereum;
pub mod rpc;
pub mod seal;

use std::rc::Rc;

use shared::config::app_config;
use shared::provider::ProviderResolver;
use shared::rpc::RpcTransport;

pub use ethereum::InjectedWallet;
pub use rpc::{GlooTimer, HttpTransport};
pub use seal::BrowserRandomSeal;

/// Fresh resolver over the page's transports.
///
/// Wallet detection runs on every call, so an extension that finishes
/// injecting after the first render is still picked up.
pub fn browser_resolver() -> ProviderResolver {
    let config = app_config();
    let injected = InjectedWallet::detect().map(|wallet| Rc::new(wallet) as Rc<dyn RpcTransport>);
    if injected.is_none() {
        log::debug!("[WALLET] no injected wallet detected");
    }
    ProviderResolver::new(
        config,
        Rc::new(HttpTransport::new(config.local_rpc_url.clone())),
        injected,
        Rc::new(GlooTimer),
    )
}
