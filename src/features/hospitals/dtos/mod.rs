pub mod hospital_dto;

pub use hospital_dto::{
    curated_id, parse_hospital_id, CreateHospitalDto, HospitalResponseDto, UpdateHospitalDto,
};
