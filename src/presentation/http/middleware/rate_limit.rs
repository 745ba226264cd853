// src/presentation/http/middleware/rate_limit.rs
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::{NonZeroU32, NonZeroUsize},
    sync::{Arc, Mutex, PoisonError},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use lru::LruCache;

use crate::config::RateLimitConfig;
use crate::presentation::http::error::HttpError;

/// Token bucket per client address. The set of tracked clients is bounded;
/// the least recently seen client is forgotten when it is full.
pub struct ClientRateLimiter {
    quota: Quota,
    trust_proxy_headers: bool,
    clients: Mutex<LruCache<IpAddr, Arc<DefaultDirectRateLimiter>>>,
}

impl ClientRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let per_second = NonZeroU32::new(config.per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst).unwrap_or(per_second);
        let capacity = NonZeroUsize::new(config.max_clients).unwrap_or(NonZeroUsize::MIN);

        Self {
            quota: Quota::per_second(per_second).allow_burst(burst),
            trust_proxy_headers: config.trust_proxy_headers,
            clients: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Consumes one token for `client`. Returns false when the bucket is empty.
    pub fn check(&self, client: IpAddr) -> bool {
        let limiter = {
            let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(clients.get_or_insert(client, || {
                Arc::new(RateLimiter::direct(self.quota))
            }))
        };
        limiter.check().is_ok()
    }

    /// Address the bucket is keyed by. Forwarding headers count only when the
    /// limiter is configured to trust them.
    pub fn client_for(&self, headers: &HeaderMap, peer: Option<IpAddr>) -> IpAddr {
        if self.trust_proxy_headers {
            client_ip(headers, peer)
        } else {
            peer.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub async fn rate_limit(
    State(limiter): State<Arc<ClientRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let client = limiter.client_for(request.headers(), peer);

    if !limiter.check(client) {
        tracing::warn!(%client, "rate limit exceeded");
        return HttpError::too_many_requests().into_response();
    }
    next.run(request).await
}

/// `X-Real-IP`, then the first `X-Forwarded-For` hop, then the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> IpAddr {
    let header_ip = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
    };

    header_ip("x-real-ip")
        .or_else(|| header_ip("x-forwarded-for"))
        .or(peer)
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
