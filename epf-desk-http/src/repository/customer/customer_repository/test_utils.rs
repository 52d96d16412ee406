#[cfg(test)]
pub mod test_utils {
    use epf_desk_api::domain::work_status::WorkStatus;
    use epf_desk_store::models::customer::CustomerModel;
    use heapless::String as HeaplessString;
    use serde_json::{json, Value};

    pub fn create_test_customer(id: i64, name: &str, status: WorkStatus) -> CustomerModel {
        let mut customer = CustomerModel::empty(id);
        customer.name = Some(name.to_string());
        customer.uan_number = Some(HeaplessString::try_from("100200300400").unwrap());
        customer.work_status = Some(status);
        customer.password = Some("secret".to_string());
        customer
    }

    pub fn customer_json(id: i64, name: &str, status: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "aadharCardName": null,
            "uanNumber": "100200300400",
            "aadharNumber": null,
            "dob": null,
            "aadharMobile": null,
            "uanPassword": null,
            "workStatus": status,
            "updatedStatus": null,
            "bankAccountNumber": null,
            "ifscCode": null,
            "commissionAmount": null,
            "paidAmount": null,
            "password": "secret",
            "createDate": "2025-01-10T10:15:30",
            "updateDate": null,
            "confirmDate": null
        })
    }
}
