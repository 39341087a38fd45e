#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("contact form rejected", &form);
    ($msg:expr, $params:expr) => {{
        let location = format!("{}:{}", file!(), line!());

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::tracing::warn!(
            location = %location,
            parameters = %params_json,
            "{}",
            $msg
        );
    }};
}
