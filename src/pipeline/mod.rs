// Pipeline orchestration — steps that combine the core with the gateways.

pub mod enrich;
