use super::{generr, inerr, AbstPath, Error};

pub fn home_dir() -> Result<AbstPath, Error> {
    match dirs::home_dir() {
        Some(home_dir) => Ok(AbstPath::from(home_dir)),
        None => Err(generr(
            "unable to retrieve home directory path",
            "failed to get home directory through crate `dirs`",
        )),
    }
}
pub fn cwd() -> Result<AbstPath, Error> {
    Ok(AbstPath::from(std::env::current_dir().map_err(inerr(
        "failed to retrieve current working directory",
    ))?))
}
