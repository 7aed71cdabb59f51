//! Upstream-shaped JSON payloads, as the IReV API returns them.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const ELECTION_ID: &str = "63f8f25b594e164f8146a213";
pub const WARD_ID: &str = "6398d0be1f1f4b9dca7c7b3c";
pub const POLLING_UNIT_ID: &str = "6398d0cf1f1f4b9dca7d0a11";

pub fn election_type() -> Value {
    json!({
        "_id": "63f8f0c0594e164f8146a1f0",
        "name": "Presidential",
        "code": "PRES",
        "election_type_id": 1,
        "created_at": "2023-02-24T12:00:00.000Z",
        "updated_at": "2023-02-24T12:00:00.000Z"
    })
}

pub fn election() -> Value {
    json!({
        "_id": ELECTION_ID,
        "full_name": "2023 PRESIDENTIAL ELECTION",
        "election_date": "2023-02-25",
        "election_id": 1,
        "election_type": "63f8f0c0594e164f8146a1f0",
        "election_type_id": 1,
        "created_at": "2023-02-24T12:00:00.000Z",
        "updated_at": "2023-02-24T12:00:00.000Z"
    })
}

pub fn state() -> Value {
    json!({
        "_id": "6398cf961f1f4b9dca7b1d8e",
        "name": "FCT",
        "code": "15",
        "state_id": 15,
        "created_at": "2022-12-13T19:00:00.000Z",
        "updated_at": "2022-12-13T19:00:00.000Z"
    })
}

pub fn lga() -> Value {
    json!({
        "_id": "6398cfb81f1f4b9dca7b2a31",
        "name": "ABAJI",
        "code": "01",
        "lga_id": 290,
        "state": "6398cf961f1f4b9dca7b1d8e",
        "state_id": 15,
        "created_at": "2022-12-13T19:00:00.000Z",
        "updated_at": "2022-12-13T19:00:00.000Z"
    })
}

pub fn ward() -> Value {
    json!({
        "_id": WARD_ID,
        "name": "AGYANA/PAMPAIDNA",
        "code": "01",
        "ward_id": 3312,
        "old_name": "",
        "state": "6398cf961f1f4b9dca7b1d8e",
        "state_id": 15,
        "lga": "6398cfb81f1f4b9dca7b2a31",
        "lga_id": 290,
        "state_constituency": "6398cfa01f1f4b9dca7b2001",
        "state_constituency_id": 1001,
        "federal_constituency": "6398cfa01f1f4b9dca7b2102",
        "federal_constituency_id": 357,
        "senatorial_district": "6398cfa01f1f4b9dca7b2203",
        "senatorial_district_id": 109,
        "created_at": "2022-12-13T19:00:00.000Z",
        "updated_at": "2022-12-13T19:00:00.000Z"
    })
}

pub fn lga_result() -> Value {
    json!({
        "wards": [ward()],
        "lga": lga(),
        "state": state()
    })
}

/// A polling unit whose `ward` is the given value (identifier or object).
pub fn polling_unit_with_ward(ward: Value) -> Value {
    json!({
        "_id": POLLING_UNIT_ID,
        "name": "ABAJI PRIMARY SCHOOL I",
        "code": "001",
        "polling_unit_id": 118_201,
        "old_name": "",
        "is_accredited": true,
        "ward_id": 3312,
        "ward": ward,
        "pu_code": "15/01/01/001",
        "pu_code_string": "15-01-01-001",
        "batch": 2,
        "created_at": "2022-12-13T19:00:00.000Z",
        "updated_at": "2023-02-25T18:00:00.000Z"
    })
}

pub fn document(id: &str) -> Value {
    json!({
        "_id": id,
        "external": false,
        "status": 1,
        "size": 412_876,
        "url": format!("https://docs.inecelectionresults.ng/elections/{id}.jpg"),
        "updated_at": "2023-02-25T18:05:00.000Z"
    })
}

/// A polling unit result as the polling unit endpoints send it: nested ward.
pub fn pu_result_nested() -> Value {
    json!({
        "polling_unit": polling_unit_with_ward(ward()),
        "document": document("63fa6e3d1c2a8b4e3f0d1a01"),
        "old_documents": [document("63fa6a111c2a8b4e3f0d0f77")]
    })
}

/// [`pu_result_nested`] with the ward replaced by its identifier.
pub fn pu_result_flat() -> Value {
    json!({
        "polling_unit": polling_unit_with_ward(json!(WARD_ID)),
        "document": document("63fa6e3d1c2a8b4e3f0d1a01"),
        "old_documents": [document("63fa6a111c2a8b4e3f0d0f77")]
    })
}
