//! Example driving the registry the way a host binding would
//!
//! Host vectors are marshalled into scalars, every call goes through a
//! handle, and the map is finalized when the host drops its reference.

use scalar_map::marshal::{scalars_to_host_list, to_host_list, HostVector};
use scalar_map::{MapError, Registry};

fn main() -> Result<(), MapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let mut registry = Registry::new();
    let map = registry.init();

    let keys = HostVector::Character(vec!["alpha".into(), "beta".into(), "gamma".into()]);
    let values = HostVector::Integer(vec![1, 2, 3]);
    registry.insert(map, keys.into_scalars()?, values.into_scalars()?)?;

    let numeric_keys = HostVector::Real(vec![0.5, 1.5]);
    let numeric_values = HostVector::Character(vec!["half".into(), "one and a half".into()]);
    registry.insert(map, numeric_keys.into_scalars()?, numeric_values.into_scalars()?)?;

    println!("size: {}", registry.size(map)?);

    let query = HostVector::Character(vec!["beta".into(), "delta".into()]).into_scalars()?;
    println!("get: {:?}", to_host_list(registry.get(map, &query)?));

    registry.remove(map, &query)?;
    println!("keys: {:?}", scalars_to_host_list(registry.keys(map)?));
    println!("values: {:?}", scalars_to_host_list(registry.values(map)?));

    let unsupported = HostVector::Unsupported {
        type_name: "list".into(),
        len: 2,
    };
    if let Err(err) = unsupported.into_scalars() {
        println!("rejected: {}", err);
    }

    registry.finalize(map)?;
    if let Err(err) = registry.size(map) {
        println!("after finalize: {}", err);
    }
    Ok(())
}
