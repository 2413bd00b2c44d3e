use async_trait::async_trait;
use cashtag_sniffer::{AddressMap, AddressMatch, AddressVerifier, Error};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// An [`AddressVerifier`] returning a fixed map for every keyword.
#[derive(Default)]
pub struct ScriptedAddressVerifier {
    addresses: AddressMap,
    delay: Duration,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedAddressVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, ticker: &str, address: &str, chain: &str) -> Self {
        self.addresses.insert(
            ticker.to_string(),
            AddressMatch {
                address: address.to_string(),
                chain: chain.to_string(),
            },
        );
        self
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressVerifier for ScriptedAddressVerifier {
    async fn verify(
        &self,
        _keyword: &str,
        _chain: Option<&str>,
        cancel: CancellationToken,
    ) -> Result<AddressMap, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            _ = tokio::time::sleep(self.delay) => match &self.failure {
                Some(message) => Err(Error::TransportError(message.clone())),
                None => Ok(self.addresses.clone()),
            },
        }
    }
}
