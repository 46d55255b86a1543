use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{BuildError, Tool, ToolContext, ToolError, ToolResult, ToolSpec, UiHints, Value};

type Handler<In, Out> =
    dyn Fn(ToolContext, In) -> BoxFuture<'static, Result<Out, ToolError>> + Send + Sync;

/// Generic adapter binding a typed async handler to the uniform [`Tool`]
/// surface. The parameter schema is derived from `In` at construction; raw
/// parameters are decoded into `In` per call.
///
/// Concurrent calls on a shared adapter are independent: the spec is
/// read-only after construction and no per-call state exists.
pub struct TypedTool<In, Out> {
    spec: ToolSpec,
    handler: Arc<Handler<In, Out>>,
}

impl<In, Out> Clone for TypedTool<In, Out> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<In, Out> std::fmt::Debug for TypedTool<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedTool").field("spec", &self.spec).finish()
    }
}

impl<In, Out> TypedTool<In, Out>
where
    In: DeserializeOwned + JsonSchema + Default + Send + Sync + 'static,
    Out: Serialize + Send + Sync + 'static,
{
    /// Builds an adapter with default configuration: category `"<name>_v1"`,
    /// empty UI hints, schema derived from `In`.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<Self, BuildError>
    where
        F: Fn(ToolContext, In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Out, ToolError>> + Send + 'static,
    {
        Self::builder(name, description).build(handler)
    }

    pub fn builder(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> TypedToolBuilder<In, Out> {
        TypedToolBuilder {
            name: name.into(),
            description: description.into(),
            category: None,
            verb: None,
            long_running: None,
            schema: None,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<In, Out> Tool for TypedTool<In, Out>
where
    In: DeserializeOwned + JsonSchema + Default + Send + Sync + 'static,
    Out: Serialize + Send + Sync + 'static,
{
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, ctx: ToolContext, params: &[u8]) -> Result<ToolResult, ToolError> {
        let input = if params.is_empty() {
            In::default()
        } else {
            match serde_json::from_slice::<In>(params) {
                Ok(input) => input,
                Err(err) => {
                    tracing::warn!(tool = %self.spec.name, error = %err, "failed to parse tool parameters");
                    return Err(ToolError::InvalidParams(err));
                }
            }
        };

        let output = match (self.handler)(ctx, input).await {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(tool = %self.spec.name, error = %err, "tool handler failed");
                return Err(err);
            }
        };

        Ok(ToolResult::success(serde_json::to_value(output)?))
    }
}

/// Configuration for a [`TypedTool`]. Each setter touches one spec field;
/// the last write per field wins.
pub struct TypedToolBuilder<In, Out> {
    name: String,
    description: String,
    category: Option<String>,
    verb: Option<String>,
    long_running: Option<bool>,
    schema: Option<Value>,
    _marker: PhantomData<fn(In) -> Out>,
}

impl<In, Out> TypedToolBuilder<In, Out>
where
    In: DeserializeOwned + JsonSchema + Default + Send + Sync + 'static,
    Out: Serialize + Send + Sync + 'static,
{
    /// Overrides the default `"<name>_v1"` category tag.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    pub fn long_running(mut self, long_running: bool) -> Self {
        self.long_running = Some(long_running);
        self
    }

    /// Replaces the schema derived from `In`. Derivation still runs first,
    /// so a broken input shape fails the build even when overridden.
    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn build<F, Fut>(self, handler: F) -> Result<TypedTool<In, Out>, BuildError>
    where
        F: Fn(ToolContext, In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Out, ToolError>> + Send + 'static,
    {
        let derived = serde_json::to_value(schemars::schema_for!(In))
            .map_err(|source| BuildError::Schema { source })?;

        let spec = ToolSpec {
            category: self
                .category
                .unwrap_or_else(|| format!("{}_v1", self.name)),
            name: self.name,
            description: self.description,
            parameters: self.schema.unwrap_or(derived),
            ui_hints: UiHints {
                verb: self.verb.unwrap_or_default(),
                long_running: self.long_running.unwrap_or_default(),
            },
        };

        let handler: Arc<Handler<In, Out>> =
            Arc::new(move |ctx, input| Box::pin(handler(ctx, input)));

        Ok(TypedTool { spec, handler })
    }
}
