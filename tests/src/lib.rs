#[cfg(test)]
mod compilation;
#[cfg(test)]
mod language;
#[cfg(test)]
mod termination;
