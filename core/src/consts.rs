/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const TOKEN_ISSUER: &str = "self";
pub const TOKEN_EXPIRY_SECS: i64 = 3600;

pub const DEFAULT_SCOPES: &str = "satellites:read satellites:write";
