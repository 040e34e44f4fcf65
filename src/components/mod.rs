// SPDX-License-Identifier: MPL-2.0
//! Component registration and cross-context dispatch.
//!
//! Hosts that resolve pieces of the player by contract-id strings register
//! factories in a [`ComponentRegistry`] and resolve them with an explicit
//! [`ComponentRequest`]. A request must state its dispatch policy — direct,
//! or marshalled onto the designated dispatch context — in full; there is no
//! silent default. Omitted dispatch arguments used to default to "no proxy"
//! and corrupted state across threads, so resolution fails loudly instead.

mod dispatch;
mod registry;

pub use dispatch::{DispatchLoop, DispatchMode, Dispatcher, Proxy};
pub use registry::{ComponentRegistry, ComponentRequest, DispatchPolicy, RENDERER_CONTRACT_ID};
