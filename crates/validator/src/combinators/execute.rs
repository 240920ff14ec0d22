//! Fan-out over independent validators
//!
//! [`execute`] runs a list of validators and reports every expected failure
//! at once. Validators run one after another, in the order given, on a
//! single background worker. The caller waits on two one-shot signals:
//!
//! - `internal`, published when a validator returns an internal error. The
//!   worker stops right after publishing, so this signal fires at most once.
//! - `done`, published with the collected failures once every validator ran.
//!
//! Whichever resolves first decides the result. An internal error replaces
//! the whole report. The worker belongs to the call: dropping the `execute`
//! future aborts it.

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio_util::task::AbortOnDropHandle;
use tracing::Instrument;

use crate::foundation::{
    BoxValidator, Check, Context, Errors, InternalError, Outcome, Rule, Subject,
    ValidationError,
};

/// Runs every validator once and aggregates their failures.
///
/// Returns `Ok(())` when all pass, an [`Errors`] aggregate of the expected
/// failures in call order otherwise, or the first internal error verbatim.
///
/// Must be awaited inside a tokio runtime to get the background worker;
/// elsewhere the same reduction runs inline.
///
/// # Examples
///
/// ```rust,ignore
/// let result = execute(&ctx, [
///     named("a", "", string().required()),
///     named("b", "ok", string().required()),
/// ])
/// .await;
/// // Errors of length 1, holding the "a" failure
/// ```
pub async fn execute<I>(ctx: &Context, validators: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = BoxValidator>,
{
    let validators: Vec<BoxValidator> = validators.into_iter().collect();
    let count = validators.len();
    tracing::debug!(validators = count, "validation started");

    let result = match Handle::try_current() {
        Ok(handle) => run_on_worker(&handle, ctx, validators).await,
        Err(_) => {
            tracing::debug!("no tokio runtime, reducing inline");
            match reduce(ctx, validators).await {
                Ok(errors) => errors.into_result(),
                Err(err) => Err(err.into()),
            }
        }
    };

    match &result {
        Ok(()) => tracing::debug!(validators = count, "validation passed"),
        Err(ValidationError::Aggregate(errors)) => {
            tracing::debug!(validators = count, failures = errors.len(), "validation failed");
        }
        Err(_) => {}
    }
    result
}

async fn run_on_worker(
    handle: &Handle,
    ctx: &Context,
    validators: Vec<BoxValidator>,
) -> Result<(), ValidationError> {
    let (internal_tx, internal_rx) = oneshot::channel::<InternalError>();
    let (done_tx, done_rx) = oneshot::channel::<Errors>();

    let span = tracing::debug_span!("rulebook.execute", validators = validators.len());
    let worker_ctx = ctx.clone();
    let worker = AbortOnDropHandle::new(handle.spawn(
        async move {
            match reduce(&worker_ctx, validators).await {
                Ok(errors) => {
                    let _ = done_tx.send(errors);
                }
                Err(err) => {
                    let _ = internal_tx.send(err);
                }
            }
        }
        .instrument(span),
    ));

    tokio::select! {
        Ok(err) = internal_rx => {
            worker.abort();
            Err(err.into())
        }
        Ok(errors) = done_rx => errors.into_result(),
        else => Err(InternalError::msg("validation worker stopped before reporting").into()),
    }
}

/// Sequential reduction shared by the worker and the inline path.
async fn reduce(ctx: &Context, validators: Vec<BoxValidator>) -> Result<Errors, InternalError> {
    let mut errors = Errors::new();
    for (index, validator) in validators.iter().enumerate() {
        match Outcome::of(validator.validate(ctx).await) {
            Outcome::Passed => {}
            Outcome::Expected(err) => errors.push(err),
            Outcome::Internal(err) => {
                tracing::warn!(index, error = %err, "internal error preempted validation");
                return Err(err);
            }
        }
    }
    Ok(errors)
}

// ============================================================================
// STRUCT RULES
// ============================================================================

struct Fields<F>(F);

#[async_trait]
impl<T, F> Check<T> for Fields<F>
where
    T: Subject,
    F: Fn(&T) -> Vec<BoxValidator> + Send + Sync,
{
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        execute(ctx, (self.0)(value)).await
    }
}

/// A rule over a composite value, validating its fields with [`execute`].
///
/// The closure receives the value and returns one validator per field,
/// usually built with [`named`](super::named). Combined with
/// [`each`](super::each) this validates nested collections of structs.
///
/// ```rust,ignore
/// let product = fields(|p: &Product| vec![
///     named("id", p.id, number::<i64>().required()),
///     named("quantity", p.quantity, number::<u32>().required().min(1).max(10)),
/// ]);
/// ```
pub fn fields<T, F>(f: F) -> Rule<T>
where
    T: Subject,
    F: Fn(&T) -> Vec<BoxValidator> + Send + Sync + 'static,
{
    Rule::new(Fields(f))
}
