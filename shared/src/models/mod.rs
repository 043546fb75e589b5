//! Data models shared between server and clients

pub mod department;
pub mod employee;
pub mod report;
pub mod salary;
pub mod user;

pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, EmployeeWithDepartment};
pub use report::{
    DepartmentSummaryRow, GenderCounts, GenderDistribution, SalaryBand, SalaryDistribution,
    TenureBand, TenureBandMember, TenureReport,
};
pub use salary::{Salary, SalaryCreate, SalaryUpdate, SalaryWithEmployee};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User};
