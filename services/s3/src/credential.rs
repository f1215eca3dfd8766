// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use reqs3_core::utils::Redact;
use reqs3_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credentials that hold everything needed to reach one bucket.
///
/// Values are fixed at construction and never change for the lifetime of a
/// client.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    region: String,
    bucket: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(access_key_id: &str, secret_access_key: &str, region: &str, bucket: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            region: region.to_string(),
            bucket: bucket.to_string(),
        }
    }

    /// Access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Region of the bucket.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Ready iff all four fields are non-empty.
    pub fn is_ready(&self) -> bool {
        !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && !self.region.is_empty()
            && !self.bucket.is_empty()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl SigningCredential for Credentials {
    fn is_valid(&self) -> bool {
        self.is_ready()
    }
}
