#![no_main]

use libfuzzer_sys::fuzz_target;

use servicefabric_client::{
    BackupConfigurationInfo, BackupPolicyDescription, Marshaller, PagedPropertyInfoList,
};

fuzz_target!(|data: &[u8]| {
    let marshaller = Marshaller::default();

    if let Ok(info) = marshaller.decode::<BackupConfigurationInfo>(data) {
        // Unrecognised enum strings decode to a sentinel that cannot be encoded.
        if let Ok(body) = marshaller.encode(&info) {
            let again: BackupConfigurationInfo =
                marshaller.decode(&body).expect("re-encoded body decodes");
            assert_eq!(again, info);
        }
    }

    let _ = marshaller.decode::<BackupPolicyDescription>(data);
    let _ = marshaller.decode::<PagedPropertyInfoList>(data);
});
