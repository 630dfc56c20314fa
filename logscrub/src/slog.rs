//! Adapters for emitting redacted records through `slog`.
//!
//! This module connects a [`RedactionPolicy`] with `slog` at three levels:
//!
//! - [`RedactingSerializer`] wraps any `slog::Serializer`. String and
//!   formatted-argument values are redacted; numbers, booleans, units and
//!   `None` pass through untouched.
//! - [`RedactedValue`] (via [`SlogRedactedExt`]) marks a single key-value pair
//!   for redaction at the call site.
//! - [`RedactingDrain`] wraps a drain and redacts the formatted message and
//!   the record's own key-values before forwarding.
//!
//! Key-values attached to the `Logger` itself (`o!(...)` context) are built
//! by the application and are forwarded as-is.
//!
//! It does not configure `slog` or pick sinks.

use std::fmt::{self, Arguments};

use slog::{
    BorrowedKV, Drain, KV, Key, Level, OwnedKVList, Record, RecordStatic, Result as SlogResult,
    Serializer, Value as SlogValue,
};

use crate::policy::RedactionPolicy;

/// A `slog::Serializer` that redacts textual values before forwarding them.
pub struct RedactingSerializer<'a> {
    inner: &'a mut dyn Serializer,
    policy: &'a RedactionPolicy,
}

impl<'a> RedactingSerializer<'a> {
    /// Wraps `inner`, redacting with `policy`.
    pub fn new(inner: &'a mut dyn Serializer, policy: &'a RedactionPolicy) -> Self {
        Self { inner, policy }
    }
}

impl Serializer for RedactingSerializer<'_> {
    fn emit_arguments(&mut self, key: Key, val: &Arguments<'_>) -> SlogResult {
        let text = val.to_string();
        let redacted = self.policy.redact(&text);
        self.inner.emit_arguments(key, &format_args!("{redacted}"))
    }

    fn emit_str(&mut self, key: Key, val: &str) -> SlogResult {
        let redacted = self.policy.redact(val);
        self.inner.emit_str(key, &redacted)
    }

    fn emit_usize(&mut self, key: Key, val: usize) -> SlogResult {
        self.inner.emit_usize(key, val)
    }

    fn emit_isize(&mut self, key: Key, val: isize) -> SlogResult {
        self.inner.emit_isize(key, val)
    }

    fn emit_bool(&mut self, key: Key, val: bool) -> SlogResult {
        self.inner.emit_bool(key, val)
    }

    fn emit_char(&mut self, key: Key, val: char) -> SlogResult {
        self.inner.emit_char(key, val)
    }

    fn emit_u8(&mut self, key: Key, val: u8) -> SlogResult {
        self.inner.emit_u8(key, val)
    }

    fn emit_i8(&mut self, key: Key, val: i8) -> SlogResult {
        self.inner.emit_i8(key, val)
    }

    fn emit_u16(&mut self, key: Key, val: u16) -> SlogResult {
        self.inner.emit_u16(key, val)
    }

    fn emit_i16(&mut self, key: Key, val: i16) -> SlogResult {
        self.inner.emit_i16(key, val)
    }

    fn emit_u32(&mut self, key: Key, val: u32) -> SlogResult {
        self.inner.emit_u32(key, val)
    }

    fn emit_i32(&mut self, key: Key, val: i32) -> SlogResult {
        self.inner.emit_i32(key, val)
    }

    fn emit_f32(&mut self, key: Key, val: f32) -> SlogResult {
        self.inner.emit_f32(key, val)
    }

    fn emit_u64(&mut self, key: Key, val: u64) -> SlogResult {
        self.inner.emit_u64(key, val)
    }

    fn emit_i64(&mut self, key: Key, val: i64) -> SlogResult {
        self.inner.emit_i64(key, val)
    }

    fn emit_f64(&mut self, key: Key, val: f64) -> SlogResult {
        self.inner.emit_f64(key, val)
    }

    fn emit_u128(&mut self, key: Key, val: u128) -> SlogResult {
        self.inner.emit_u128(key, val)
    }

    fn emit_i128(&mut self, key: Key, val: i128) -> SlogResult {
        self.inner.emit_i128(key, val)
    }

    fn emit_unit(&mut self, key: Key) -> SlogResult {
        self.inner.emit_unit(key)
    }

    fn emit_none(&mut self, key: Key) -> SlogResult {
        self.inner.emit_none(key)
    }
}

/// A `slog::Value` serialized through a [`RedactingSerializer`].
pub struct RedactedValue<'p, V> {
    value: V,
    policy: &'p RedactionPolicy,
}

impl<V> SlogValue for RedactedValue<'_, V>
where
    V: SlogValue,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let mut redacting = RedactingSerializer::new(serializer, self.policy);
        self.value.serialize(record, key, &mut redacting)
    }
}

/// Extension trait for marking `slog` values for redaction.
///
/// ## Example
/// ```ignore
/// use logscrub::slog::SlogRedactedExt;
///
/// info!(logger, "login"; "credentials" => form.raw_body().slog_redacted());
/// ```
pub trait SlogRedactedExt: SlogValue + Sized {
    /// Redacts with the process-wide default policy when serialized.
    fn slog_redacted(self) -> RedactedValue<'static, Self> {
        self.slog_redacted_with(RedactionPolicy::global())
    }

    /// Redacts with `policy` when serialized.
    fn slog_redacted_with(self, policy: &RedactionPolicy) -> RedactedValue<'_, Self> {
        RedactedValue {
            value: self,
            policy,
        }
    }
}

impl<V> SlogRedactedExt for V where V: SlogValue {}

struct RedactedKv<'a> {
    kv: BorrowedKV<'a>,
    policy: &'a RedactionPolicy,
}

impl KV for RedactedKv<'_> {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        let mut redacting = RedactingSerializer::new(serializer, self.policy);
        self.kv.serialize(record, &mut redacting)
    }
}

/// A drain that redacts each record's message and key-values, then forwards it.
pub struct RedactingDrain<D> {
    drain: D,
    policy: RedactionPolicy,
}

impl<D> RedactingDrain<D> {
    /// Wraps `drain`, redacting with the process-wide default policy.
    pub fn new(drain: D) -> Self {
        Self::with_policy(drain, RedactionPolicy::global().clone())
    }

    /// Wraps `drain`, redacting with `policy`.
    pub fn with_policy(drain: D, policy: RedactionPolicy) -> Self {
        Self { drain, policy }
    }
}

impl<D> fmt::Debug for RedactingDrain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactingDrain")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<D> Drain for RedactingDrain<D>
where
    D: Drain,
{
    type Ok = D::Ok;
    type Err = D::Err;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let message = record.msg().to_string();
        let redacted = self.policy.redact(&message);
        let kv = RedactedKv {
            kv: record.kv(),
            policy: &self.policy,
        };
        let record_static = RecordStatic {
            location: record.location(),
            tag: record.tag(),
            level: record.level(),
        };
        self.drain.log(
            &Record::new(&record_static, &format_args!("{redacted}"), BorrowedKV(&kv)),
            values,
        )
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.drain.is_enabled(level)
    }
}
