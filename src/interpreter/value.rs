use std::{
	fmt::Display,
	sync::{Arc, LazyLock},
};

/// A handle to a runtime value. Booleans and null are shared singletons, so two
/// handles are the *same* value exactly when `Arc::ptr_eq` says so.
pub type Object = Arc<Value>;

/// Value represents a runtime value.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
	Integer(i64),
	Boolean(bool),
	Null,
	Error(String),
}

static TRUE: LazyLock<Object> = LazyLock::new(|| Arc::new(Value::Boolean(true)));
static FALSE: LazyLock<Object> = LazyLock::new(|| Arc::new(Value::Boolean(false)));
static NULL: LazyLock<Object> = LazyLock::new(|| Arc::new(Value::Null));

/// The shared `true` or `false` instance.
pub fn native_bool(value: bool) -> Object { Arc::clone(if value { &TRUE } else { &FALSE }) }

/// The shared `null` instance.
pub fn null() -> Object { Arc::clone(&NULL) }

pub fn integer(value: i64) -> Object { Arc::new(Value::Integer(value)) }

pub fn error(message: impl Into<String>) -> Object { Arc::new(Value::Error(message.into())) }

pub fn is_true(object: &Object) -> bool { Arc::ptr_eq(object, &TRUE) }

pub fn is_false(object: &Object) -> bool { Arc::ptr_eq(object, &FALSE) }

pub fn is_null(object: &Object) -> bool { Arc::ptr_eq(object, &NULL) }

/// Only the `false` and `null` singletons are falsy, every other value
/// (any integer included) counts as true in a condition.
pub fn is_truthy(object: &Object) -> bool { !(is_false(object) || is_null(object)) }

impl Value {
	/// Human readable rendering for hosts.
	pub fn describe(&self) -> String { self.to_string() }

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Integer(_) => "INTEGER",
			Value::Boolean(_) => "BOOLEAN",
			Value::Null => "NULL",
			Value::Error(_) => "ERROR",
		}
	}

	pub fn is_error(&self) -> bool { matches!(self, Value::Error(_)) }
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Integer(n) => write!(f, "{n}"),
			Value::Boolean(b) => write!(f, "{b}"),
			Value::Null => write!(f, "null"),
			Value::Error(message) => write!(f, "ERROR: {message}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn singletons_are_shared() {
		assert!(Arc::ptr_eq(&native_bool(true), &native_bool(true)));
		assert!(Arc::ptr_eq(&native_bool(false), &native_bool(false)));
		assert!(Arc::ptr_eq(&null(), &null()));
		assert!(!Arc::ptr_eq(&native_bool(true), &native_bool(false)));
		assert!(!Arc::ptr_eq(&integer(1), &integer(1)));
	}

	#[test]
	fn truthiness() {
		assert!(is_truthy(&native_bool(true)));
		assert!(!is_truthy(&native_bool(false)));
		assert!(!is_truthy(&null()));
		assert!(is_truthy(&integer(0)));
		assert!(is_truthy(&error("boom")));
	}

	#[test]
	fn describe() {
		assert_eq!(integer(-29).describe(), "-29");
		assert_eq!(native_bool(true).describe(), "true");
		assert_eq!(native_bool(false).describe(), "false");
		assert_eq!(null().describe(), "null");
		assert_eq!(error("division by zero").describe(), "ERROR: division by zero");
	}

	#[test]
	fn type_names() {
		assert_eq!(integer(1).type_name(), "INTEGER");
		assert_eq!(null().type_name(), "NULL");
		assert_eq!(native_bool(false).type_name(), "BOOLEAN");
		assert_eq!(error("x").type_name(), "ERROR");
		assert!(error("x").is_error());
	}
}
