//! リフレッシュパイプライン実装のレジストリ

use std::{collections::HashMap, hash::Hash, sync::Arc};

use tokio::sync::RwLock;

use super::{Adapter, AdapterId, Proxy, ProxyId};

/// ID から実装を引く並行マップ
///
/// 登録は起動時に行い、同じ ID は上書きする。解決は単純な検索。
pub struct Registry<K, V: ?Sized> {
    entries: RwLock<HashMap<K, Arc<V>>>,
}

pub type ProxyRegistry = Registry<ProxyId, dyn Proxy>;
pub type AdapterRegistry = Registry<AdapterId, dyn Adapter>;

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + Clone + Ord,
    V: ?Sized,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// `id` に `value` を登録（既存の登録は置き換える）
    pub async fn register(&self, id: K, value: Arc<V>) {
        self.entries.write().await.insert(id, value);
    }

    pub async fn resolve(&self, id: &K) -> Option<Arc<V>> {
        self.entries.read().await.get(id).cloned()
    }

    /// 登録済みの ID（ソート済み）
    pub async fn ids(&self) -> Vec<K> {
        let mut ids: Vec<K> = self.entries.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl<K, V> Default for Registry<K, V>
where
    K: Eq + Hash + Clone + Ord,
    V: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}
