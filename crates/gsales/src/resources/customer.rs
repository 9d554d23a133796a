//! Customers resource

use super::{Context, Procedures, ResourceKind};
use crate::types::{Customer, CustomerBase};

/// Customer resource kind.
#[derive(Debug, Clone, Copy)]
pub struct CustomerResource;

impl ResourceKind for CustomerResource {
    type Entity = Customer;
    type Base = CustomerBase;

    const NAME: &'static str = "customer";

    const PROCEDURES: Procedures = Procedures {
        get: "getCustomer",
        list: "getCustomers",
        count: "getCustomersCount",
        create: "createCustomer",
        update: "updateCustomer",
        delete: "deleteCustomer",
        id_param: "customerid",
    };
}

/// Customers resource.
pub type Customers = Context<CustomerResource>;
