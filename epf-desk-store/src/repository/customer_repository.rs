use crate::models::customer::CustomerModel;
use crate::models::requests::CreateCustomerRequest;

use super::{Confirm, Create, Delete, LoadAll, Reopen, Update};

/// Every operation the front-end performs against customer records.
pub trait CustomerRepository:
    LoadAll<CustomerModel>
    + Create<CreateCustomerRequest>
    + Update<CustomerModel>
    + Confirm<CustomerModel>
    + Reopen
    + Delete
{
}

impl<T> CustomerRepository for T where
    T: LoadAll<CustomerModel>
        + Create<CreateCustomerRequest>
        + Update<CustomerModel>
        + Confirm<CustomerModel>
        + Reopen
        + Delete
{
}
