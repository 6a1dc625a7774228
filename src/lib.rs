// SPDX-License-Identifier: MIT

pub mod gate;
