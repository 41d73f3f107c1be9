//! Integration tests for the payroll engine API.
//!
//! This test suite exercises the full pipeline through the HTTP boundary:
//! - Standard weeks, overtime, grace-period and midnight-crossing shifts
//! - Statutory deduction figures end to end
//! - Per-request schedule overrides
//! - Error cases: malformed JSON, missing fields, bad punches, bad rates

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::PayrollConfig;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(PayrollConfig::default()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn assert_decimal_field(result: &Value, field: &str, expected: &str) {
    let actual = result[field]
        .as_str()
        .unwrap_or_else(|| panic!("missing field {field} in {result}"));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected {field} {expected}, got {actual}"
    );
}

async fn post_compute(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/compute")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(hourly_rate: &str, shifts: Vec<Value>) -> Value {
    json!({
        "employee": {
            "id": "emp_001",
            "employee_number": "EMP-0001",
            "first_name": "Maria",
            "last_name": "Santos",
            "position": "Accountant",
            "department": "Finance",
            "hourly_rate": hourly_rate
        },
        "pay_period": {
            "start_date": "2023-06-12",
            "end_date": "2023-06-18"
        },
        "shifts": shifts
    })
}

fn create_shift(id: &str, date: &str, time_in: &str, time_out: &str) -> Value {
    json!({
        "id": id,
        "employee_id": "emp_001",
        "date": date,
        "time_in": time_in,
        "time_out": time_out
    })
}

fn standard_week() -> Vec<Value> {
    (12..17)
        .map(|day| {
            create_shift(
                &format!("shift_{day}"),
                &format!("2023-06-{day}"),
                "08:00",
                "16:00",
            )
        })
        .collect()
}

// =============================================================================
// Happy-path scenarios
// =============================================================================

/// IT-001: a standard 40-hour week at 100/hour
#[tokio::test]
async fn test_standard_week() {
    let request = create_request("100", standard_week());
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "regular_hours", "40");
    assert_decimal_field(&body, "overtime_hours", "0");
    assert_decimal_field(&body, "total_hours", "40");
    assert_decimal_field(&body, "regular_pay", "4000");
    assert_decimal_field(&body, "overtime_pay", "0");
    assert_decimal_field(&body, "gross_pay", "4000");

    // Monthly 16,000: SSS 720, PhilHealth 240, Pag-IBIG 100, no tax.
    assert_decimal_field(&body, "sss_deduction", "180");
    assert_decimal_field(&body, "philhealth_deduction", "60");
    assert_decimal_field(&body, "pagibig_deduction", "25");
    assert_decimal_field(&body, "tax_deduction", "0");
    assert_decimal_field(&body, "total_deductions", "265");
    assert_decimal_field(&body, "net_pay", "3735");

    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["period"]["start_date"], "2023-06-12");
}

/// IT-002: the 5,000-gross reference case at 125/hour
#[tokio::test]
async fn test_reference_deduction_case() {
    let request = create_request("125", standard_week());
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "gross_pay", "5000");

    // Monthly 20,000: SSS 900, PhilHealth 300, Pag-IBIG 100, no tax.
    assert_decimal_field(&body, "sss_deduction", "225");
    assert_decimal_field(&body, "philhealth_deduction", "75");
    assert_decimal_field(&body, "pagibig_deduction", "25");
    assert_decimal_field(&body, "tax_deduction", "0");
    assert_decimal_field(&body, "total_deductions", "325");
    assert_decimal_field(&body, "net_pay", "4675");
}

/// IT-003: overtime carries the 25% premium through to pay
#[tokio::test]
async fn test_week_with_overtime() {
    let mut shifts = standard_week();
    shifts.push(create_shift("shift_17", "2023-06-17", "08:00", "18:00"));

    let request = create_request("100", shifts);
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    // Saturday worked 600 minutes: 480 regular, 120 overtime.
    assert_decimal_field(&body, "regular_hours", "48");
    assert_decimal_field(&body, "overtime_hours", "2");
    assert_decimal_field(&body, "regular_pay", "4800");
    // 2 x 100 x 1.25
    assert_decimal_field(&body, "overtime_pay", "250");
    assert_decimal_field(&body, "gross_pay", "5050");
}

/// IT-004: late and undertime penalties reduce regular hours
#[tokio::test]
async fn test_late_and_undertime_week() {
    let shifts = vec![create_shift("shift_12", "2023-06-12", "08:25", "15:30")];
    let request = create_request("60", shifts);
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    // 425 worked minutes, 25 late and 30 undertime: 370 regular minutes.
    let regular_hours = decimal(body["regular_hours"].as_str().unwrap());
    assert_eq!(regular_hours, decimal("370") / decimal("60"));
    // (370/60) x 60 = 370 pesos
    assert_decimal_field(&body, "gross_pay", "370");
}

/// IT-005: a midnight-crossing shift with a night schedule override
#[tokio::test]
async fn test_midnight_crossing_with_schedule_override() {
    let mut request = create_request(
        "100",
        vec![create_shift("shift_12", "2023-06-12", "22:00", "06:00")],
    );
    request["schedule"] = json!({
        "expected_time_in": "22:00",
        "grace_period_minutes": 10,
        "standard_shift_minutes": 480
    });

    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "regular_hours", "8");
    assert_decimal_field(&body, "overtime_hours", "0");
    assert_decimal_field(&body, "gross_pay", "800");
}

/// IT-006: shifts outside the period are ignored
#[tokio::test]
async fn test_shifts_outside_period_excluded() {
    let shifts = vec![
        create_shift("inside", "2023-06-12", "08:00", "16:00"),
        create_shift("outside", "2023-06-19", "08:00", "16:00"),
    ];
    let request = create_request("100", shifts);
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "regular_hours", "8");
}

/// IT-007: an empty period returns the zero record
#[tokio::test]
async fn test_empty_period_returns_zero_record() {
    let request = create_request("100", vec![]);
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "gross_pay", "0");
    assert_decimal_field(&body, "total_deductions", "0");
    assert_decimal_field(&body, "net_pay", "0");
}

/// IT-008: identical requests yield identical responses
#[tokio::test]
async fn test_idempotent_over_http() {
    let request = create_request("137.50", standard_week());

    let (_, first) = post_compute(create_router_for_test(), request.clone()).await;
    let (_, second) = post_compute(create_router_for_test(), request).await;
    assert_eq!(first, second);
}

// =============================================================================
// Error cases
// =============================================================================

/// IT-020: malformed JSON is a 400
#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/compute")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"]["code"], "MALFORMED_JSON");
}

/// IT-021: a missing field is a validation error
#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let request = json!({
        "pay_period": { "start_date": "2023-06-12", "end_date": "2023-06-18" },
        "shifts": []
    });
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

/// IT-022: a malformed punch is a 422 with the offending value
#[tokio::test]
async fn test_malformed_punch_returns_422() {
    let shifts = vec![create_shift("shift_12", "2023-06-12", "25:99", "16:00")];
    let request = create_request("100", shifts);
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_TIME_FORMAT");
    assert!(body["error"]["message"].as_str().unwrap().contains("25:99"));
}

/// IT-023: a non-positive hourly rate is a 422
#[tokio::test]
async fn test_non_positive_rate_returns_422() {
    let request = create_request("0", standard_week());
    let (status, body) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_PAY_INPUT");
}

/// IT-024: a malformed schedule override is a 422
#[tokio::test]
async fn test_malformed_schedule_override_returns_422() {
    let mut request = create_request("100", standard_week());
    request["schedule"] = json!({
        "expected_time_in": "eight sharp",
        "grace_period_minutes": 10,
        "standard_shift_minutes": 480
    });

    let (status, body) = post_compute(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_TIME_FORMAT");
}

/// IT-025: an irreconcilable schedule window is a 422
#[tokio::test]
async fn test_zero_length_schedule_window_returns_422() {
    let mut request = create_request("100", standard_week());
    request["schedule"] = json!({
        "expected_time_in": "08:00",
        "grace_period_minutes": 10,
        "standard_shift_minutes": 0
    });

    let (status, body) = post_compute(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_SHIFT_WINDOW");
}
