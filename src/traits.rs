use crate::structures::Error;

/// Typed, optional access to the fields of a JSON configuration object
pub trait ConfigValue {
  fn optional_string(&self, key: &str) -> Result<Option<String>, Error>;
  fn optional_u64(&self, key: &str) -> Result<Option<u64>, Error>;
  fn optional_string_list(&self, key: &str) -> Result<Option<Vec<String>>, Error>;
}

impl ConfigValue for json::JsonValue {
  fn optional_string(&self, key: &str) -> Result<Option<String>, Error> {
    let value = &self[key];
    if value.is_null() {
      return Ok(None);
    }
    value.as_str()
      .map(|string| Some(string.to_string()))
      .ok_or_else(|| Error::InvalidConfig(format!("\"{}\" should be a string, got: {}", key, value.dump())))
  }

  fn optional_u64(&self, key: &str) -> Result<Option<u64>, Error> {
    let value = &self[key];
    if value.is_null() {
      return Ok(None);
    }
    value.as_u64()
      .map(Some)
      .ok_or_else(|| Error::InvalidConfig(format!("\"{}\" should be a positive integer, got: {}", key, value.dump())))
  }

  fn optional_string_list(&self, key: &str) -> Result<Option<Vec<String>>, Error> {
    let value = &self[key];
    if value.is_null() {
      return Ok(None);
    }
    if !value.is_array() {
      return Err(Error::InvalidConfig(format!("\"{}\" should be a list of strings, got: {}", key, value.dump())));
    }
    value.members()
      .map(|member| member.as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidConfig(format!("\"{}\" should only contain strings, got: {}", key, member.dump()))))
      .collect::<Result<Vec<String>, Error>>()
      .map(Some)
  }
}
