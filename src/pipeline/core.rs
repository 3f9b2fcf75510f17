// Pipeline engine - type-directed routing over sources and transformers

use super::keys::TypedKey;
use crate::error::{NashorError, Result};
use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Boxed value moving through the pipeline
pub type PipeValue = Box<dyn Any + Send + Sync>;

/// Runtime tag identifying a data type in the routing graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for a concrete type
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name, for reports and errors
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Query parameter map passed to sources
#[derive(Clone, Default)]
pub struct PipeMap {
    data: HashMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl PipeMap {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert a value with a typed key (compile-time type checking)
    pub fn insert_typed<T: Any + Send + Sync>(&mut self, key: TypedKey<T>, value: T) {
        self.data.insert(key.name(), Arc::new(value));
    }

    /// Get a value with a typed key (compile-time type checking)
    pub fn get_typed<T: Any + Send + Sync>(&self, key: TypedKey<T>) -> Option<&T> {
        self.data
            .get(key.name())
            .and_then(|v| v.downcast_ref::<T>())
    }
}

/// A data-producing pipeline component
#[async_trait]
pub trait DataSource: Send + Sync {
    fn name(&self) -> String;

    /// Type tags this source can produce
    fn provides(&self) -> Vec<TypeTag>;

    /// Produce a value of the tagged type for the given query
    async fn get(&self, tag: TypeTag, query: &PipeMap) -> Result<PipeValue>;
}

/// A type-converting pipeline component
pub trait DataTransformer: Send + Sync {
    fn name(&self) -> String;

    /// (source type, destination type) pairs this transformer handles
    fn transforms(&self) -> Vec<(TypeTag, TypeTag)>;

    /// Convert a value from one tagged type to another
    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue>;
}

/// Pipeline - routes typed data requests through sources and transformers
pub struct DataPipeline {
    sources: Vec<Box<dyn DataSource>>,
    transformers: Vec<Box<dyn DataTransformer>>,
}

impl DataPipeline {
    pub fn new(
        sources: Vec<Box<dyn DataSource>>,
        transformers: Vec<Box<dyn DataTransformer>>,
    ) -> Self {
        Self {
            sources,
            transformers,
        }
    }

    pub fn sources(&self) -> &[Box<dyn DataSource>] {
        &self.sources
    }

    pub fn transformers(&self) -> &[Box<dyn DataTransformer>] {
        &self.transformers
    }

    /// Fetch a value of type `T`, converting from whatever a source provides
    /// when no source produces `T` directly.
    pub async fn get<T: Any + Send + Sync>(&self, query: &PipeMap) -> Result<T> {
        let target = TypeTag::of::<T>();
        let value = self.route(target, query).await?;
        value.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            NashorError::parse(format!("pipeline produced a value that is not {}", target.name()))
        })
    }

    /// Direct provider first, otherwise the shortest transformer chain from
    /// any source-provided type to the target.
    async fn route(&self, target: TypeTag, query: &PipeMap) -> Result<PipeValue> {
        if let Some(source) = self.provider_of(target) {
            debug!("routing {} directly through {}", target.name(), source.name());
            return source.get(target, query).await;
        }

        // Transform edges: from-type -> (to-type, transformer index)
        let mut edges: HashMap<TypeTag, Vec<(TypeTag, usize)>> = HashMap::new();
        for (idx, transformer) in self.transformers.iter().enumerate() {
            for (from, to) in transformer.transforms() {
                edges.entry(from).or_default().push((to, idx));
            }
        }

        // BFS from every type a source can produce
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut parent: HashMap<TypeTag, (TypeTag, usize)> = HashMap::new();
        for source in &self.sources {
            for tag in source.provides() {
                if visited.insert(tag) {
                    queue.push_back(tag);
                }
            }
        }

        let mut reached = false;
        'search: while let Some(tag) = queue.pop_front() {
            let Some(nexts) = edges.get(&tag) else {
                continue;
            };
            for &(next, idx) in nexts {
                if visited.insert(next) {
                    parent.insert(next, (tag, idx));
                    if next == target {
                        reached = true;
                        break 'search;
                    }
                    queue.push_back(next);
                }
            }
        }

        if !reached {
            return Err(NashorError::no_route(target.name()));
        }

        // Walk back to the source-provided origin, collecting transform steps
        let mut steps = Vec::new();
        let mut cursor = target;
        while let Some(&(prev, idx)) = parent.get(&cursor) {
            steps.push((idx, prev, cursor));
            cursor = prev;
        }
        steps.reverse();
        let origin = cursor;

        // Origin was seeded from a source's provides list
        let source = self
            .provider_of(origin)
            .ok_or_else(|| NashorError::no_route(origin.name()))?;
        debug!(
            "routing {} from {} via {} transform step(s)",
            target.name(),
            source.name(),
            steps.len()
        );

        let mut value = source.get(origin, query).await?;
        for (idx, from, to) in steps {
            value = self.transformers[idx].transform(from, to, value)?;
        }
        Ok(value)
    }

    fn provider_of(&self, tag: TypeTag) -> Option<&dyn DataSource> {
        self.sources
            .iter()
            .find(|source| source.provides().contains(&tag))
            .map(|source| source.as_ref())
    }
}
