mod envelope;
pub use self::envelope::{decode_envelope, Envelope, Paginated, Pagination};

mod machine;
pub use self::machine::{
    AddedIp, CreateMachineOptions, CreatedMachine, Ip, Machine, MachineCommand, MachineFull, Os,
    ReinstallMachineOptions, UpdateMachineOptions, UpdateStatus, User,
};

mod job;
pub use self::job::Job;

mod product;
pub use self::product::{Limits, Product};

mod catalog;
pub use self::catalog::{Brand, Location, Template};
